//! Property lists and the property groups shared between classes.
//!
//! Each group mirrors one level of the Roblox class tree (GuiBase2d,
//! GuiObject, GuiButton, ...). A concrete class writes its groups in
//! ancestor-then-self order into a [`PropertyList`], which renders values
//! for one output format as they are pushed.

use crate::kind::{Category, Kind, RefTarget};
use blox_core::enums::{
    AutomaticSize, BorderMode, ButtonStyle, FillDirection, HorizontalAlignment, ResamplerMode,
    ScaleType, SelectionBehavior, SizeConstraint, SortOrder, TextDirection, TextTruncate,
    TextXAlignment, TextYAlignment, VerticalAlignment, ZIndexBehavior,
};
use blox_core::{Color3, Content, EntityId, Font, Format, PropertyValue, Rect, UDim2, Vector2};

/// One written property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEntry {
    /// A value already rendered for the list's format.
    Rendered { name: &'static str, text: String },
    /// A link to another entity, resolved by the format writer.
    Reference {
        name: &'static str,
        target: Option<EntityId>,
        expects: RefTarget,
    },
}

impl PropertyEntry {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyEntry::Rendered { name, .. } | PropertyEntry::Reference { name, .. } => name,
        }
    }
}

/// Ordered properties of one entity, rendered for one format.
#[derive(Debug, Clone)]
pub struct PropertyList {
    format: Format,
    entries: Vec<PropertyEntry>,
}

impl PropertyList {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            entries: Vec::new(),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Render and append a value.
    pub fn push<V: PropertyValue + ?Sized>(&mut self, name: &'static str, value: &V) {
        let text = match self.format {
            Format::Script => value.to_lua(),
            Format::Markup => value.to_xml(name),
        };
        self.entries.push(PropertyEntry::Rendered { name, text });
    }

    /// Append a reference to another entity.
    pub fn reference(&mut self, name: &'static str, target: Option<EntityId>, expects: RefTarget) {
        self.entries.push(PropertyEntry::Reference {
            name,
            target,
            expects,
        });
    }

    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(PropertyEntry::name).collect()
    }

    /// Rendered text of a property, if it is a plain value.
    pub fn rendered(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            PropertyEntry::Rendered { name: n, text } if *n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Properties every 2D GUI class inherits.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiBase2dProps {
    pub auto_localize: bool,
    pub root_localization_table: Option<EntityId>,
    pub selection_behavior_down: SelectionBehavior,
    pub selection_behavior_left: SelectionBehavior,
    pub selection_behavior_right: SelectionBehavior,
    pub selection_behavior_up: SelectionBehavior,
    pub selection_group: bool,
}

impl Default for GuiBase2dProps {
    fn default() -> Self {
        Self {
            auto_localize: true,
            root_localization_table: None,
            selection_behavior_down: SelectionBehavior::Escape,
            selection_behavior_left: SelectionBehavior::Escape,
            selection_behavior_right: SelectionBehavior::Escape,
            selection_behavior_up: SelectionBehavior::Escape,
            selection_group: false,
        }
    }
}

impl GuiBase2dProps {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("AutoLocalize", &self.auto_localize);
        list.reference(
            "RootLocalizationTable",
            self.root_localization_table,
            RefTarget::Kind(Kind::LocalizationTable),
        );
        list.push("SelectionBehaviorDown", &self.selection_behavior_down);
        list.push("SelectionBehaviorLeft", &self.selection_behavior_left);
        list.push("SelectionBehaviorRight", &self.selection_behavior_right);
        list.push("SelectionBehaviorUp", &self.selection_behavior_up);
        list.push("SelectionGroup", &self.selection_group);
    }
}

/// Properties of every visible GUI element.
///
/// Defaults are those of a Frame inserted in Studio; classes that differ
/// (buttons, labels) override fields in their own `Default`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiObjectProps {
    pub base: GuiBase2dProps,
    pub active: bool,
    pub anchor_point: Vector2,
    pub automatic_size: AutomaticSize,
    pub background_color3: Color3,
    pub background_transparency: f64,
    pub border_color3: Color3,
    pub border_mode: BorderMode,
    pub border_size_pixel: i32,
    pub clips_descendants: bool,
    pub draggable: bool,
    pub interactable: bool,
    pub layout_order: i32,
    pub next_selection_down: Option<EntityId>,
    pub next_selection_left: Option<EntityId>,
    pub next_selection_right: Option<EntityId>,
    pub next_selection_up: Option<EntityId>,
    pub position: UDim2,
    pub rotation: f64,
    pub selectable: bool,
    pub selection_image_object: Option<EntityId>,
    pub selection_order: i32,
    pub size: UDim2,
    pub size_constraint: SizeConstraint,
    pub visible: bool,
    pub z_index: i32,
}

impl Default for GuiObjectProps {
    fn default() -> Self {
        Self {
            base: GuiBase2dProps::default(),
            active: false,
            anchor_point: Vector2::ZERO,
            automatic_size: AutomaticSize::None,
            background_color3: Color3::WHITE,
            background_transparency: 0.0,
            border_color3: Color3::rgb(27, 42, 53),
            border_mode: BorderMode::Outline,
            border_size_pixel: 1,
            clips_descendants: false,
            draggable: false,
            interactable: true,
            layout_order: 0,
            next_selection_down: None,
            next_selection_left: None,
            next_selection_right: None,
            next_selection_up: None,
            position: UDim2::default(),
            rotation: 0.0,
            selectable: false,
            selection_image_object: None,
            selection_order: 0,
            size: UDim2::from_offset(100, 100),
            size_constraint: SizeConstraint::RelativeXY,
            visible: true,
            z_index: 1,
        }
    }
}

impl GuiObjectProps {
    /// Defaults for clickable classes, which start active and selectable.
    pub fn interactive() -> Self {
        Self {
            active: true,
            selectable: true,
            ..Self::default()
        }
    }

    pub fn sized(mut self, size: UDim2) -> Self {
        self.size = size;
        self
    }

    pub fn write(&self, list: &mut PropertyList) {
        let gui_object = RefTarget::Category(Category::GuiObject);

        self.base.write(list);
        list.push("Active", &self.active);
        list.push("AnchorPoint", &self.anchor_point);
        list.push("AutomaticSize", &self.automatic_size);
        list.push("BackgroundColor3", &self.background_color3);
        list.push("BackgroundTransparency", &self.background_transparency);
        list.push("BorderColor3", &self.border_color3);
        list.push("BorderMode", &self.border_mode);
        list.push("BorderSizePixel", &self.border_size_pixel);
        list.push("ClipsDescendants", &self.clips_descendants);
        // Model files always carry Draggable disabled, whatever the field says.
        let draggable = match list.format() {
            Format::Script => self.draggable,
            Format::Markup => false,
        };
        list.push("Draggable", &draggable);
        list.push("Interactable", &self.interactable);
        list.push("LayoutOrder", &self.layout_order);
        list.reference("NextSelectionDown", self.next_selection_down, gui_object);
        list.reference("NextSelectionLeft", self.next_selection_left, gui_object);
        list.reference("NextSelectionRight", self.next_selection_right, gui_object);
        list.reference("NextSelectionUp", self.next_selection_up, gui_object);
        list.push("Position", &self.position);
        list.push("Rotation", &self.rotation);
        list.push("Selectable", &self.selectable);
        list.reference("SelectionImageObject", self.selection_image_object, gui_object);
        list.push("SelectionOrder", &self.selection_order);
        list.push("Size", &self.size);
        list.push("SizeConstraint", &self.size_constraint);
        list.push("Visible", &self.visible);
        list.push("ZIndex", &self.z_index);
    }
}

/// Properties shared by TextButton and ImageButton.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub auto_button_color: bool,
    pub modal: bool,
    pub selected: bool,
    pub style: ButtonStyle,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            auto_button_color: true,
            modal: false,
            selected: false,
            style: ButtonStyle::Custom,
        }
    }
}

impl ButtonProps {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("AutoButtonColor", &self.auto_button_color);
        list.push("Modal", &self.modal);
        list.push("Selected", &self.selected);
        list.push("Style", &self.style);
    }
}

/// Properties shared by TextLabel, TextButton and TextBox.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub font_face: Font,
    pub line_height: f64,
    pub max_visible_graphemes: i32,
    pub rich_text: bool,
    pub text: String,
    pub text_color3: Color3,
    pub text_direction: TextDirection,
    pub text_scaled: bool,
    pub text_size: f64,
    pub text_stroke_color3: Color3,
    pub text_stroke_transparency: f64,
    pub text_transparency: f64,
    pub text_truncate: TextTruncate,
    pub text_wrapped: bool,
    pub text_x_alignment: TextXAlignment,
    pub text_y_alignment: TextYAlignment,
}

impl TextProps {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            font_face: Font::default(),
            line_height: 1.0,
            max_visible_graphemes: -1,
            rich_text: false,
            text: text.into(),
            text_color3: Color3::BLACK,
            text_direction: TextDirection::Auto,
            text_scaled: false,
            text_size: 14.0,
            text_stroke_color3: Color3::BLACK,
            text_stroke_transparency: 1.0,
            text_transparency: 0.0,
            text_truncate: TextTruncate::None,
            text_wrapped: false,
            text_x_alignment: TextXAlignment::Center,
            text_y_alignment: TextYAlignment::Center,
        }
    }

    pub fn write(&self, list: &mut PropertyList) {
        list.push("FontFace", &self.font_face);
        list.push("LineHeight", &self.line_height);
        list.push("MaxVisibleGraphemes", &self.max_visible_graphemes);
        list.push("RichText", &self.rich_text);
        list.push("Text", &self.text);
        list.push("TextColor3", &self.text_color3);
        list.push("TextDirection", &self.text_direction);
        list.push("TextScaled", &self.text_scaled);
        list.push("TextSize", &self.text_size);
        list.push("TextStrokeColor3", &self.text_stroke_color3);
        list.push("TextStrokeTransparency", &self.text_stroke_transparency);
        list.push("TextTransparency", &self.text_transparency);
        list.push("TextTruncate", &self.text_truncate);
        list.push("TextWrapped", &self.text_wrapped);
        list.push("TextXAlignment", &self.text_x_alignment);
        list.push("TextYAlignment", &self.text_y_alignment);
    }
}

/// Properties shared by ImageLabel and ImageButton.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageProps {
    pub image: Content,
    pub image_color3: Color3,
    pub image_rect_offset: Vector2,
    pub image_rect_size: Vector2,
    pub image_transparency: f64,
    pub resample_mode: ResamplerMode,
    pub scale_type: ScaleType,
    pub slice_center: Rect,
    pub slice_scale: f64,
    pub tile_size: UDim2,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            image: Content::none(),
            image_color3: Color3::WHITE,
            image_rect_offset: Vector2::ZERO,
            image_rect_size: Vector2::ZERO,
            image_transparency: 0.0,
            resample_mode: ResamplerMode::Default,
            scale_type: ScaleType::Stretch,
            slice_center: Rect::default(),
            slice_scale: 1.0,
            tile_size: UDim2::from_scale(1.0, 1.0),
        }
    }
}

impl ImageProps {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("Image", &self.image);
        list.push("ImageColor3", &self.image_color3);
        list.push("ImageRectOffset", &self.image_rect_offset);
        list.push("ImageRectSize", &self.image_rect_size);
        list.push("ImageTransparency", &self.image_transparency);
        list.push("ResampleMode", &self.resample_mode);
        list.push("ScaleType", &self.scale_type);
        list.push("SliceCenter", &self.slice_center);
        list.push("SliceScale", &self.slice_scale);
        list.push("TileSize", &self.tile_size);
    }
}

/// Properties of top-level GUI containers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerCollectorProps {
    pub base: GuiBase2dProps,
    pub enabled: bool,
    pub reset_on_spawn: bool,
    pub z_index_behavior: ZIndexBehavior,
}

impl Default for LayerCollectorProps {
    fn default() -> Self {
        Self {
            base: GuiBase2dProps::default(),
            enabled: true,
            reset_on_spawn: true,
            z_index_behavior: ZIndexBehavior::Sibling,
        }
    }
}

impl LayerCollectorProps {
    pub fn write(&self, list: &mut PropertyList) {
        self.base.write(list);
        list.push("Enabled", &self.enabled);
        list.push("ResetOnSpawn", &self.reset_on_spawn);
        list.push("ZIndexBehavior", &self.z_index_behavior);
    }
}

/// Properties shared by list and grid layouts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridStyleProps {
    pub fill_direction: FillDirection,
    pub horizontal_alignment: HorizontalAlignment,
    pub sort_order: SortOrder,
    pub vertical_alignment: VerticalAlignment,
}

impl GridStyleProps {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("FillDirection", &self.fill_direction);
        list.push("HorizontalAlignment", &self.horizontal_alignment);
        list.push("SortOrder", &self.sort_order);
        list.push("VerticalAlignment", &self.vertical_alignment);
    }
}
