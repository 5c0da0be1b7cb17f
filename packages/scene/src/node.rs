use crate::{Mixed, Paint, Rect};
use serde::de::Error as DeError;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Properties shared by every node kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCommon {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Bounds of the rendered pixels, including strokes and effects.
    /// `None` when the node renders nothing.
    #[serde(default)]
    pub absolute_render_bounds: Option<Rect>,

    /// Layout box, excluding effects
    #[serde(default)]
    pub absolute_bounding_box: Option<Rect>,
}

fn default_visible() -> bool {
    true
}

impl NodeCommon {
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            visible: true,
            absolute_render_bounds: Some(bounds),
            absolute_bounding_box: Some(bounds),
        }
    }
}

/// A node of the selected subtree
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Group(GroupNode),
    Text(TextNode),
    Rectangle(RectangleNode),
    Line(LineNode),
    Unsupported(UnsupportedNode),
}

impl SceneNode {
    pub fn common(&self) -> &NodeCommon {
        match self {
            SceneNode::Group(node) => &node.common,
            SceneNode::Text(node) => &node.common,
            SceneNode::Rectangle(node) => &node.common,
            SceneNode::Line(node) => &node.common,
            SceneNode::Unsupported(node) => &node.common,
        }
    }

    /// Host type name, e.g. `"RECTANGLE"`
    pub fn type_name(&self) -> &str {
        match self {
            SceneNode::Group(_) => "GROUP",
            SceneNode::Text(_) => "TEXT",
            SceneNode::Rectangle(_) => "RECTANGLE",
            SceneNode::Line(_) => "LINE",
            SceneNode::Unsupported(node) => &node.kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn is_visible(&self) -> bool {
        self.common().visible
    }

    pub fn render_bounds(&self) -> Option<&Rect> {
        self.common().absolute_render_bounds.as_ref()
    }

    /// Direct children; empty for every kind except groups
    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Group(group) => &group.children,
            _ => &[],
        }
    }
}

impl Serialize for SceneNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            SceneNode::Group(node) => serde_json::to_value(node),
            SceneNode::Text(node) => serde_json::to_value(node),
            SceneNode::Rectangle(node) => serde_json::to_value(node),
            SceneNode::Line(node) => serde_json::to_value(node),
            SceneNode::Unsupported(node) => serde_json::to_value(&node.common),
        };

        let mut value = value.map_err(S::Error::custom)?;
        if let Value::Object(fields) = &mut value {
            fields.insert("type".to_string(), Value::String(self.type_name().to_string()));
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SceneNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SceneNode::from_value(value).map_err(D::Error::custom)
    }
}

impl SceneNode {
    /// Decode one node from its JSON value.
    ///
    /// Group children are detached before the node's own fields are decoded,
    /// so each level only ever looks at a shallow object.
    fn from_value(mut value: Value) -> Result<Self, serde_json::Error> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <serde_json::Error as DeError>::missing_field("type"))?
            .to_string();
        let children = value
            .as_object_mut()
            .and_then(|fields| fields.remove("children"));

        let node = match kind.as_str() {
            "GROUP" => {
                let mut group: GroupNode = serde_json::from_value(value)?;
                group.children = match children {
                    Some(Value::Array(children)) => children
                        .into_iter()
                        .map(SceneNode::from_value)
                        .collect::<Result<_, _>>()?,
                    Some(_) => {
                        let message = "children must be an array";
                        return Err(<serde_json::Error as DeError>::custom(message));
                    }
                    None => Vec::new(),
                };
                SceneNode::Group(group)
            }
            "TEXT" => SceneNode::Text(serde_json::from_value(value)?),
            "RECTANGLE" => SceneNode::Rectangle(serde_json::from_value(value)?),
            "LINE" => SceneNode::Line(serde_json::from_value(value)?),
            _ => SceneNode::Unsupported(UnsupportedNode {
                common: serde_json::from_value(value)?,
                kind,
            }),
        };

        Ok(node)
    }
}

/// Container whose children are listed back to front
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(flatten)]
    pub common: NodeCommon,

    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl GroupNode {
    pub fn new(bounds: Rect) -> Self {
        Self {
            common: NodeCommon::new(bounds),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<SceneNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.common.visible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::new("Inter", "Regular")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justified => "justified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "UPPERCASE")]
pub enum LineHeight {
    Pixels {
        value: f64,
    },
    Percent {
        value: f64,
    },
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(flatten)]
    pub common: NodeCommon,

    #[serde(default)]
    pub characters: String,

    #[serde(default)]
    pub font_name: Mixed<FontName>,

    #[serde(default = "default_font_size")]
    pub font_size: Mixed<f64>,

    #[serde(default)]
    pub text_align_horizontal: TextAlign,

    #[serde(default)]
    pub line_height: Mixed<LineHeight>,

    #[serde(default)]
    pub fills: Mixed<Vec<Paint>>,
}

fn default_font_size() -> Mixed<f64> {
    Mixed::Uniform(12.0)
}

impl TextNode {
    pub fn new(characters: impl Into<String>, bounds: Rect) -> Self {
        Self {
            common: NodeCommon::new(bounds),
            characters: characters.into(),
            font_name: Mixed::default(),
            font_size: default_font_size(),
            text_align_horizontal: TextAlign::default(),
            line_height: Mixed::default(),
            fills: Mixed::default(),
        }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        match &mut self.fills {
            Mixed::Uniform(fills) => fills.push(paint),
            Mixed::Heterogeneous => self.fills = Mixed::Uniform(vec![paint]),
        }
        self
    }

    pub fn with_font(mut self, font_name: FontName, font_size: f64) -> Self {
        self.font_name = Mixed::Uniform(font_name);
        self.font_size = Mixed::Uniform(font_size);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.common.visible = false;
        self
    }
}

/// Per-corner radii, consulted when `cornerRadius` is mixed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    #[serde(default)]
    pub top_left_radius: f64,
    #[serde(default)]
    pub top_right_radius: f64,
    #[serde(default)]
    pub bottom_left_radius: f64,
    #[serde(default)]
    pub bottom_right_radius: f64,
}

/// Per-edge stroke weights, consulted when `strokeWeight` is mixed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeWeights {
    #[serde(default)]
    pub stroke_top_weight: f64,
    #[serde(default)]
    pub stroke_right_weight: f64,
    #[serde(default)]
    pub stroke_bottom_weight: f64,
    #[serde(default)]
    pub stroke_left_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
}

impl StrokeAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeAlign::Inside => "INSIDE",
            StrokeAlign::Outside => "OUTSIDE",
            StrokeAlign::Center => "CENTER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleNode {
    #[serde(flatten)]
    pub common: NodeCommon,

    #[serde(default)]
    pub corner_radius: Mixed<f64>,

    #[serde(flatten)]
    pub radii: CornerRadii,

    #[serde(default)]
    pub strokes: Vec<Paint>,

    #[serde(default)]
    pub stroke_weight: Mixed<f64>,

    #[serde(flatten)]
    pub stroke_weights: StrokeWeights,

    #[serde(default)]
    pub stroke_align: StrokeAlign,

    #[serde(default)]
    pub fills: Mixed<Vec<Paint>>,

    /// Marks the rectangle as an embedded bitmap
    #[serde(default)]
    pub is_asset: bool,
}

impl RectangleNode {
    pub fn new(bounds: Rect) -> Self {
        Self {
            common: NodeCommon::new(bounds),
            ..Default::default()
        }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        match &mut self.fills {
            Mixed::Uniform(fills) => fills.push(paint),
            Mixed::Heterogeneous => self.fills = Mixed::Uniform(vec![paint]),
        }
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = Mixed::Uniform(weight);
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Mixed::Uniform(radius);
        self
    }

    pub fn with_corner_radii(mut self, radii: CornerRadii) -> Self {
        self.corner_radius = Mixed::Heterogeneous;
        self.radii = radii;
        self
    }

    pub fn as_asset(mut self) -> Self {
        self.is_asset = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.common.visible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineNode {
    #[serde(flatten)]
    pub common: NodeCommon,

    #[serde(default)]
    pub strokes: Vec<Paint>,

    #[serde(default)]
    pub stroke_weight: Mixed<f64>,
}

impl LineNode {
    pub fn new(bounds: Rect) -> Self {
        Self {
            common: NodeCommon::new(bounds),
            ..Default::default()
        }
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = Mixed::Uniform(weight);
        self
    }
}

/// Any node kind the converter does not export (frames, ellipses, vectors...)
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedNode {
    pub kind: String,
    pub common: NodeCommon,
}

impl From<GroupNode> for SceneNode {
    fn from(node: GroupNode) -> Self {
        SceneNode::Group(node)
    }
}

impl From<TextNode> for SceneNode {
    fn from(node: TextNode) -> Self {
        SceneNode::Text(node)
    }
}

impl From<RectangleNode> for SceneNode {
    fn from(node: RectangleNode) -> Self {
        SceneNode::Rectangle(node)
    }
}

impl From<LineNode> for SceneNode {
    fn from(node: LineNode) -> Self {
        SceneNode::Line(node)
    }
}

impl From<UnsupportedNode> for SceneNode {
    fn from(node: UnsupportedNode) -> Self {
        SceneNode::Unsupported(node)
    }
}
