use crate::geometry::{round_half_up, Origin};
use crate::order::{normalize_z_indices, VisitOrder};
use crate::parsers::{parse_block, parse_image, parse_line, parse_text, ParseContext};
use crate::{ConvertError, ConvertOptions, ConvertResult};
use blueprint_document::{to_json, Blueprint};
use blueprint_scene::SceneNode;
use tracing::{debug, info, instrument};

/// Converts selections into blueprints
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub options: ConvertOptions,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert the subtree rooted at `root`.
    ///
    /// Children of a group are pushed in listed order and popped in reverse,
    /// so the last listed child is visited first and ends up with the highest
    /// zIndex.
    #[instrument(skip(self, root), fields(root = %root.name(), kind = %root.type_name()))]
    pub fn convert(&self, root: &SceneNode) -> ConvertResult<Blueprint> {
        if !root.is_visible() {
            return Err(ConvertError::HiddenRoot(root.name().to_string()));
        }
        let Some(bounds) = root.render_bounds() else {
            return Err(ConvertError::MissingRenderBounds(root.name().to_string()));
        };

        info!("Starting blueprint conversion");

        let origin = Origin::of(bounds);
        let mut blueprint = Blueprint::with_background(
            round_half_up(bounds.width),
            round_half_up(bounds.height),
            self.options.background_color.clone(),
        );

        let mut order = VisitOrder::new();
        let mut stack: Vec<&SceneNode> = vec![root];

        while let Some(node) = stack.pop() {
            let ctx = ParseContext {
                origin,
                z_index: order.advance(),
                options: &self.options,
            };

            match node {
                SceneNode::Group(group) => stack.extend(group.children.iter()),
                SceneNode::Text(text) => {
                    if let Some(component) = parse_text(text, &ctx) {
                        blueprint.add_text(component);
                    }
                }
                SceneNode::Rectangle(rect) if rect.is_asset => {
                    if let Some(component) = parse_image(rect, &ctx) {
                        blueprint.add_image(component);
                    }
                }
                SceneNode::Rectangle(rect) => {
                    if let Some(component) = parse_block(rect, &ctx) {
                        blueprint.add_block(component);
                    }
                }
                SceneNode::Line(line) => {
                    if let Some(component) = parse_line(line, &ctx) {
                        blueprint.add_line(component);
                    }
                }
                SceneNode::Unsupported(other) => {
                    debug!(node = %other.common.name, kind = %other.kind, "Skipping unsupported node");
                }
            }
        }

        normalize_z_indices(&mut blueprint, order.floor());

        info!(
            visited = order.visited(),
            texts = blueprint.texts.len(),
            blocks = blueprint.blocks.len(),
            images = blueprint.images.len(),
            lines = blueprint.lines.len(),
            "Blueprint conversion complete"
        );

        if blueprint.is_empty() {
            return Err(ConvertError::NothingToExport);
        }

        Ok(blueprint)
    }

    pub fn convert_to_json(&self, root: &SceneNode) -> ConvertResult<String> {
        let blueprint = self.convert(root)?;
        Ok(to_json(&blueprint)?)
    }
}

/// Convert with default options
pub fn convert(root: &SceneNode) -> ConvertResult<Blueprint> {
    Converter::new().convert(root)
}

/// Convert and encode as tab-indented JSON
pub fn convert_to_json(root: &SceneNode, options: &ConvertOptions) -> ConvertResult<String> {
    Converter::with_options(options.clone()).convert_to_json(root)
}

/// Host-facing variant: any failure becomes an empty string, which the host
/// treats as "nothing to export".
pub fn convert_or_empty(root: &SceneNode) -> String {
    Converter::new()
        .convert_to_json(root)
        .unwrap_or_else(|err| {
            debug!(error = %err, "Conversion produced no output");
            String::new()
        })
}
