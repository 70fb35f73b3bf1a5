//! Demo document shown on startup

use layer_model::{LayerKind, LayerNode, Page};

/// Two pages: a landing page layout and a page of reusable components
pub fn demo_pages() -> Vec<Page> {
    vec![
        LayerNode::new("page-1", "File", LayerKind::Frame)
            .expanded()
            .with_children(vec![
                LayerNode::new("frame-hero", "Hero Section", LayerKind::Frame)
                    .expanded()
                    .with_children(vec![
                        LayerNode::new("group-header", "Header", LayerKind::Group)
                            .expanded()
                            .with_children(vec![
                                LayerNode::new("text-title", "Title", LayerKind::Text),
                                LayerNode::new("text-subtitle", "Subtitle", LayerKind::Text),
                            ]),
                        LayerNode::new("component-button", "CTA Button", LayerKind::Component),
                        LayerNode::new("image-banner", "Banner Image", LayerKind::Image).locked(),
                    ]),
                LayerNode::new("frame-features", "Features Section", LayerKind::Frame)
                    .expanded()
                    .with_children(vec![
                        LayerNode::new("group-feature-1", "Feature Card 1", LayerKind::Group)
                            .with_children(vec![
                                LayerNode::new("rect-bg", "Background", LayerKind::Rectangle),
                                LayerNode::new("icon-feature", "Icon", LayerKind::Shape).hidden(),
                            ]),
                        LayerNode::new("group-feature-2", "Feature Card 2", LayerKind::Group)
                            .with_children(vec![
                                LayerNode::new("rect-bg-2", "Background", LayerKind::Rectangle),
                            ]),
                    ]),
                LayerNode::new("frame-footer", "Footer", LayerKind::Frame)
                    .expanded()
                    .with_children(vec![
                        LayerNode::new("text-copyright", "Copyright", LayerKind::Text).locked(),
                        LayerNode::new("group-links", "Links", LayerKind::Group),
                    ]),
            ]),
        LayerNode::new("page-2", "Assets", LayerKind::Frame)
            .expanded()
            .with_children(vec![
                LayerNode::new("component-btn-primary", "Button / Primary", LayerKind::Component),
                LayerNode::new("component-btn-secondary", "Button / Secondary", LayerKind::Component),
                LayerNode::new("component-input", "Input Field", LayerKind::Component),
            ]),
    ]
}
