//! One record per supported Roblox class.
//!
//! Defaults match what Roblox Studio inserts for each class. Every record
//! writes its inherited groups first and its own properties last.

use crate::kind::{Kind, RefTarget};
use crate::props::{
    ButtonProps, GridStyleProps, GuiObjectProps, ImageProps, LayerCollectorProps, PropertyList,
    TextProps,
};
use blox_core::enums::{
    ApplyStrokeMode, AspectType, AutomaticSize, CameraType, DominantAxis, ElasticBehavior,
    FieldOfViewMode, FillDirection, FrameStyle, ItemLineAlignment, LineJoinMode,
    SafeAreaCompatibility, ScreenInsets, ScrollBarInset, ScrollingDirection, StartCorner,
    UIFlexAlignment, VerticalScrollBarPosition,
};
use blox_core::{
    CFrame, Color3, ColorSequence, Content, EntityId, NumberSequence, UDim, UDim2, Vector2,
    Vector3,
};

/// A plain rectangular container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub gui: GuiObjectProps,
    pub style: FrameStyle,
}

impl Frame {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        list.push("Style", &self.style);
    }
}

/// A container whose content can scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollingFrame {
    pub gui: GuiObjectProps,
    pub automatic_canvas_size: AutomaticSize,
    pub bottom_image: Content,
    pub canvas_position: Vector2,
    pub canvas_size: UDim2,
    pub elastic_behavior: ElasticBehavior,
    pub horizontal_scroll_bar_inset: ScrollBarInset,
    pub mid_image: Content,
    pub scroll_bar_image_color3: Color3,
    pub scroll_bar_image_transparency: f64,
    pub scroll_bar_thickness: i32,
    pub scrolling_direction: ScrollingDirection,
    pub scrolling_enabled: bool,
    pub top_image: Content,
    pub vertical_scroll_bar_inset: ScrollBarInset,
    pub vertical_scroll_bar_position: VerticalScrollBarPosition,
}

impl Default for ScrollingFrame {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::interactive(),
            automatic_canvas_size: AutomaticSize::None,
            bottom_image: Content::url("rbxasset://textures/ui/Scroll/scroll-bottom.png"),
            canvas_position: Vector2::ZERO,
            canvas_size: UDim2::new(0.0, 0, 2.0, 0),
            elastic_behavior: ElasticBehavior::WhenScrollable,
            horizontal_scroll_bar_inset: ScrollBarInset::None,
            mid_image: Content::url("rbxasset://textures/ui/Scroll/scroll-middle.png"),
            scroll_bar_image_color3: Color3::BLACK,
            scroll_bar_image_transparency: 0.0,
            scroll_bar_thickness: 12,
            scrolling_direction: ScrollingDirection::XY,
            scrolling_enabled: true,
            top_image: Content::url("rbxasset://textures/ui/Scroll/scroll-top.png"),
            vertical_scroll_bar_inset: ScrollBarInset::None,
            vertical_scroll_bar_position: VerticalScrollBarPosition::Right,
        }
    }
}

impl ScrollingFrame {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        list.push("AutomaticCanvasSize", &self.automatic_canvas_size);
        list.push("BottomImage", &self.bottom_image);
        list.push("CanvasPosition", &self.canvas_position);
        list.push("CanvasSize", &self.canvas_size);
        list.push("ElasticBehavior", &self.elastic_behavior);
        list.push("HorizontalScrollBarInset", &self.horizontal_scroll_bar_inset);
        list.push("MidImage", &self.mid_image);
        list.push("ScrollBarImageColor3", &self.scroll_bar_image_color3);
        list.push("ScrollBarImageTransparency", &self.scroll_bar_image_transparency);
        list.push("ScrollBarThickness", &self.scroll_bar_thickness);
        list.push("ScrollingDirection", &self.scrolling_direction);
        list.push("ScrollingEnabled", &self.scrolling_enabled);
        list.push("TopImage", &self.top_image);
        list.push("VerticalScrollBarInset", &self.vertical_scroll_bar_inset);
        list.push("VerticalScrollBarPosition", &self.vertical_scroll_bar_position);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub gui: GuiObjectProps,
    pub text: TextProps,
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::default().sized(UDim2::from_offset(200, 50)),
            text: TextProps::with_text("Label"),
        }
    }
}

impl TextLabel {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        self.text.write(list);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextButton {
    pub gui: GuiObjectProps,
    pub button: ButtonProps,
    pub text: TextProps,
}

impl Default for TextButton {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::interactive().sized(UDim2::from_offset(200, 50)),
            button: ButtonProps::default(),
            text: TextProps::with_text("Button"),
        }
    }
}

impl TextButton {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        self.button.write(list);
        self.text.write(list);
    }
}

/// An editable text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub gui: GuiObjectProps,
    pub text: TextProps,
    pub clear_text_on_focus: bool,
    pub cursor_position: i32,
    pub multi_line: bool,
    pub placeholder_color3: Color3,
    pub placeholder_text: String,
    pub selection_start: i32,
    pub show_native_input: bool,
    pub text_editable: bool,
}

impl Default for TextBox {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::interactive().sized(UDim2::from_offset(200, 50)),
            text: TextProps::with_text("TextBox"),
            clear_text_on_focus: true,
            cursor_position: 1,
            multi_line: false,
            placeholder_color3: Color3::rgb(178, 178, 178),
            placeholder_text: String::new(),
            selection_start: -1,
            show_native_input: true,
            text_editable: true,
        }
    }
}

impl TextBox {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        self.text.write(list);
        list.push("ClearTextOnFocus", &self.clear_text_on_focus);
        list.push("CursorPosition", &self.cursor_position);
        list.push("MultiLine", &self.multi_line);
        list.push("PlaceholderColor3", &self.placeholder_color3);
        list.push("PlaceholderText", &self.placeholder_text);
        list.push("SelectionStart", &self.selection_start);
        list.push("ShowNativeInput", &self.show_native_input);
        list.push("TextEditable", &self.text_editable);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageLabel {
    pub gui: GuiObjectProps,
    pub image: ImageProps,
}

impl ImageLabel {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        self.image.write(list);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageButton {
    pub gui: GuiObjectProps,
    pub button: ButtonProps,
    pub image: ImageProps,
    pub hover_image: Content,
    pub pressed_image: Content,
}

impl Default for ImageButton {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::interactive(),
            button: ButtonProps::default(),
            image: ImageProps::default(),
            hover_image: Content::none(),
            pressed_image: Content::none(),
        }
    }
}

impl ImageButton {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        self.button.write(list);
        self.image.write(list);
        list.push("HoverImage", &self.hover_image);
        list.push("PressedImage", &self.pressed_image);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    pub gui: GuiObjectProps,
    pub looped: bool,
    pub playing: bool,
    pub time_position: f64,
    pub video: Content,
    pub volume: f64,
}

impl Default for VideoFrame {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::default(),
            looped: false,
            playing: false,
            time_position: 0.0,
            video: Content::none(),
            volume: 1.0,
        }
    }
}

impl VideoFrame {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        list.push("Looped", &self.looped);
        list.push("Playing", &self.playing);
        list.push("TimePosition", &self.time_position);
        list.push("Video", &self.video);
        list.push("Volume", &self.volume);
    }
}

/// Renders 3D content through its own camera.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportFrame {
    pub gui: GuiObjectProps,
    pub ambient: Color3,
    pub current_camera: Option<EntityId>,
    pub image_color3: Color3,
    pub image_transparency: f64,
    pub light_color: Color3,
    pub light_direction: Vector3,
}

impl Default for ViewportFrame {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::default(),
            ambient: Color3::rgb(200, 200, 200),
            current_camera: None,
            image_color3: Color3::WHITE,
            image_transparency: 0.0,
            light_color: Color3::rgb(140, 140, 140),
            light_direction: Vector3::new(-1.0, -1.0, -1.0),
        }
    }
}

impl ViewportFrame {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        list.push("Ambient", &self.ambient);
        list.reference("CurrentCamera", self.current_camera, RefTarget::Kind(Kind::Camera));
        list.push("ImageColor3", &self.image_color3);
        list.push("ImageTransparency", &self.image_transparency);
        list.push("LightColor", &self.light_color);
        list.push("LightDirection", &self.light_direction);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGroup {
    pub gui: GuiObjectProps,
    pub group_color3: Color3,
    pub group_transparency: f64,
}

impl Default for CanvasGroup {
    fn default() -> Self {
        Self {
            gui: GuiObjectProps::default(),
            group_color3: Color3::WHITE,
            group_transparency: 0.0,
        }
    }
}

impl CanvasGroup {
    pub fn write(&self, list: &mut PropertyList) {
        self.gui.write(list);
        list.push("GroupColor3", &self.group_color3);
        list.push("GroupTransparency", &self.group_transparency);
    }
}

/// Top-level container drawn over the player's screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenGui {
    pub layer: LayerCollectorProps,
    pub clip_to_device_safe_area: bool,
    pub display_order: i32,
    pub ignore_gui_inset: bool,
    pub safe_area_compatibility: SafeAreaCompatibility,
    pub screen_insets: ScreenInsets,
}

impl Default for ScreenGui {
    fn default() -> Self {
        Self {
            layer: LayerCollectorProps::default(),
            clip_to_device_safe_area: true,
            display_order: 0,
            ignore_gui_inset: false,
            safe_area_compatibility: SafeAreaCompatibility::FullscreenExtension,
            screen_insets: ScreenInsets::CoreUISafeInsets,
        }
    }
}

impl ScreenGui {
    pub fn write(&self, list: &mut PropertyList) {
        self.layer.write(list);
        list.push("ClipToDeviceSafeArea", &self.clip_to_device_safe_area);
        list.push("DisplayOrder", &self.display_order);
        list.push("IgnoreGuiInset", &self.ignore_gui_inset);
        list.push("SafeAreaCompatibility", &self.safe_area_compatibility);
        list.push("ScreenInsets", &self.screen_insets);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UICorner {
    pub corner_radius: UDim,
}

impl Default for UICorner {
    fn default() -> Self {
        Self {
            corner_radius: UDim::from_offset(8),
        }
    }
}

impl UICorner {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("CornerRadius", &self.corner_radius);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIStroke {
    pub apply_stroke_mode: ApplyStrokeMode,
    pub color: Color3,
    pub enabled: bool,
    pub line_join_mode: LineJoinMode,
    pub thickness: f64,
    pub transparency: f64,
}

impl Default for UIStroke {
    fn default() -> Self {
        Self {
            apply_stroke_mode: ApplyStrokeMode::Contextual,
            color: Color3::BLACK,
            enabled: true,
            line_join_mode: LineJoinMode::Round,
            thickness: 1.0,
            transparency: 0.0,
        }
    }
}

impl UIStroke {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("ApplyStrokeMode", &self.apply_stroke_mode);
        list.push("Color", &self.color);
        list.push("Enabled", &self.enabled);
        list.push("LineJoinMode", &self.line_join_mode);
        list.push("Thickness", &self.thickness);
        list.push("Transparency", &self.transparency);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UIPadding {
    pub padding_bottom: UDim,
    pub padding_left: UDim,
    pub padding_right: UDim,
    pub padding_top: UDim,
}

impl UIPadding {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("PaddingBottom", &self.padding_bottom);
        list.push("PaddingLeft", &self.padding_left);
        list.push("PaddingRight", &self.padding_right);
        list.push("PaddingTop", &self.padding_top);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIScale {
    pub scale: f64,
}

impl Default for UIScale {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl UIScale {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("Scale", &self.scale);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIGradient {
    pub color: ColorSequence,
    pub enabled: bool,
    pub offset: Vector2,
    pub rotation: f64,
    pub transparency: NumberSequence,
}

impl Default for UIGradient {
    fn default() -> Self {
        Self {
            color: ColorSequence::default(),
            enabled: true,
            offset: Vector2::ZERO,
            rotation: 0.0,
            transparency: NumberSequence::default(),
        }
    }
}

impl UIGradient {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("Color", &self.color);
        list.push("Enabled", &self.enabled);
        list.push("Offset", &self.offset);
        list.push("Rotation", &self.rotation);
        list.push("Transparency", &self.transparency);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIAspectRatioConstraint {
    pub aspect_ratio: f64,
    pub aspect_type: AspectType,
    pub dominant_axis: DominantAxis,
}

impl Default for UIAspectRatioConstraint {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            aspect_type: AspectType::FitWithinMaxSize,
            dominant_axis: DominantAxis::Width,
        }
    }
}

impl UIAspectRatioConstraint {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("AspectRatio", &self.aspect_ratio);
        list.push("AspectType", &self.aspect_type);
        list.push("DominantAxis", &self.dominant_axis);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UISizeConstraint {
    pub max_size: Vector2,
    pub min_size: Vector2,
}

impl Default for UISizeConstraint {
    fn default() -> Self {
        Self {
            max_size: Vector2::new(f64::INFINITY, f64::INFINITY),
            min_size: Vector2::ZERO,
        }
    }
}

impl UISizeConstraint {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("MaxSize", &self.max_size);
        list.push("MinSize", &self.min_size);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UITextSizeConstraint {
    pub max_text_size: i32,
    pub min_text_size: i32,
}

impl Default for UITextSizeConstraint {
    fn default() -> Self {
        Self {
            max_text_size: 100,
            min_text_size: 1,
        }
    }
}

impl UITextSizeConstraint {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("MaxTextSize", &self.max_text_size);
        list.push("MinTextSize", &self.min_text_size);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UIListLayout {
    pub grid: GridStyleProps,
    pub horizontal_flex: UIFlexAlignment,
    pub item_line_alignment: ItemLineAlignment,
    pub padding: UDim,
    pub vertical_flex: UIFlexAlignment,
    pub wraps: bool,
}

impl UIListLayout {
    pub fn write(&self, list: &mut PropertyList) {
        self.grid.write(list);
        list.push("HorizontalFlex", &self.horizontal_flex);
        list.push("ItemLineAlignment", &self.item_line_alignment);
        list.push("Padding", &self.padding);
        list.push("VerticalFlex", &self.vertical_flex);
        list.push("Wraps", &self.wraps);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIGridLayout {
    pub grid: GridStyleProps,
    pub cell_padding: UDim2,
    pub cell_size: UDim2,
    pub fill_direction_max_cells: i32,
    pub start_corner: StartCorner,
}

impl Default for UIGridLayout {
    fn default() -> Self {
        Self {
            grid: GridStyleProps {
                fill_direction: FillDirection::Horizontal,
                ..GridStyleProps::default()
            },
            cell_padding: UDim2::from_offset(5, 5),
            cell_size: UDim2::from_offset(100, 100),
            fill_direction_max_cells: 0,
            start_corner: StartCorner::TopLeft,
        }
    }
}

impl UIGridLayout {
    pub fn write(&self, list: &mut PropertyList) {
        self.grid.write(list);
        list.push("CellPadding", &self.cell_padding);
        list.push("CellSize", &self.cell_size);
        list.push("FillDirectionMaxCells", &self.fill_direction_max_cells);
        list.push("StartCorner", &self.start_corner);
    }
}

/// Viewport camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub cframe: CFrame,
    pub camera_type: CameraType,
    pub field_of_view: f64,
    pub field_of_view_mode: FieldOfViewMode,
    pub focus: CFrame,
    pub head_locked: bool,
    pub head_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            cframe: CFrame::IDENTITY,
            camera_type: CameraType::Fixed,
            field_of_view: 70.0,
            field_of_view_mode: FieldOfViewMode::Vertical,
            focus: CFrame::from_position(Vector3::new(0.0, 0.0, -5.0)),
            head_locked: true,
            head_scale: 1.0,
        }
    }
}

impl Camera {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("CFrame", &self.cframe);
        list.push("CameraType", &self.camera_type);
        list.push("FieldOfView", &self.field_of_view);
        list.push("FieldOfViewMode", &self.field_of_view_mode);
        list.push("Focus", &self.focus);
        list.push("HeadLocked", &self.head_locked);
        list.push("HeadScale", &self.head_scale);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationTable {
    pub source_locale_id: String,
}

impl Default for LocalizationTable {
    fn default() -> Self {
        Self {
            source_locale_id: "en-us".to_string(),
        }
    }
}

impl LocalizationTable {
    pub fn write(&self, list: &mut PropertyList) {
        list.push("SourceLocaleId", &self.source_locale_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use blox_core::enums::ScaleType;
    use blox_core::Format;

    fn script(kind: Kind) -> PropertyList {
        Entity::of_kind(kind).properties(Format::Script)
    }

    fn markup(kind: Kind) -> PropertyList {
        Entity::of_kind(kind).properties(Format::Markup)
    }

    /// The class's own properties, written after every inherited group.
    fn assert_ends_with(list: &PropertyList, own: &[&str]) {
        let names = list.names();
        assert!(names.ends_with(own), "{names:?}");
    }

    #[test]
    fn test_scrolling_frame_defaults() {
        let frame = ScrollingFrame::default();
        assert!(frame.gui.active);
        assert!(frame.gui.selectable);
        assert_eq!(frame.canvas_size, UDim2::new(0.0, 0, 2.0, 0));
        assert_eq!(frame.scroll_bar_thickness, 12);

        let list = script(Kind::ScrollingFrame);
        assert_ends_with(
            &list,
            &[
                "AutomaticCanvasSize",
                "BottomImage",
                "CanvasPosition",
                "CanvasSize",
                "ElasticBehavior",
                "HorizontalScrollBarInset",
                "MidImage",
                "ScrollBarImageColor3",
                "ScrollBarImageTransparency",
                "ScrollBarThickness",
                "ScrollingDirection",
                "ScrollingEnabled",
                "TopImage",
                "VerticalScrollBarInset",
                "VerticalScrollBarPosition",
            ],
        );
        assert_eq!(list.rendered("CanvasSize"), Some("UDim2.new(0, 0, 2, 0)"));
        assert_eq!(
            list.rendered("BottomImage"),
            Some("\"rbxasset://textures/ui/Scroll/scroll-bottom.png\"")
        );
        assert_eq!(list.rendered("ScrollBarImageColor3"), Some("Color3.fromRGB(0, 0, 0)"));
        assert_eq!(list.rendered("ScrollingDirection"), Some("Enum.ScrollingDirection.XY"));
        assert_eq!(
            list.rendered("VerticalScrollBarPosition"),
            Some("Enum.VerticalScrollBarPosition.Right")
        );
        assert_eq!(
            markup(Kind::ScrollingFrame).rendered("ScrollingDirection"),
            Some("<token name=\"ScrollingDirection\">4</token>")
        );
    }

    #[test]
    fn test_image_label_defaults() {
        let label = ImageLabel::default();
        assert!(!label.gui.active);
        assert!(label.image.image.is_none());
        assert_eq!(label.image.scale_type, ScaleType::Stretch);

        let list = script(Kind::ImageLabel);
        assert_ends_with(
            &list,
            &[
                "Image",
                "ImageColor3",
                "ImageRectOffset",
                "ImageRectSize",
                "ImageTransparency",
                "ResampleMode",
                "ScaleType",
                "SliceCenter",
                "SliceScale",
                "TileSize",
            ],
        );
        assert_eq!(list.rendered("Image"), Some("\"\""));
        assert_eq!(list.rendered("ImageColor3"), Some("Color3.fromRGB(255, 255, 255)"));
        assert_eq!(list.rendered("ScaleType"), Some("Enum.ScaleType.Stretch"));
        assert_eq!(list.rendered("TileSize"), Some("UDim2.new(1, 0, 1, 0)"));
        assert_eq!(
            markup(Kind::ImageLabel).rendered("Image"),
            Some("<Content name=\"Image\"><null></null></Content>")
        );
    }

    #[test]
    fn test_image_button_defaults() {
        let button = ImageButton::default();
        assert!(button.gui.active);
        assert!(button.button.auto_button_color);
        assert!(button.hover_image.is_none());
        assert!(button.pressed_image.is_none());

        let list = script(Kind::ImageButton);
        assert_ends_with(&list, &["SliceScale", "TileSize", "HoverImage", "PressedImage"]);
        assert_eq!(list.rendered("AutoButtonColor"), Some("true"));
        assert_eq!(list.rendered("Style"), Some("Enum.ButtonStyle.Custom"));
        assert_eq!(list.rendered("PressedImage"), Some("\"\""));
    }

    #[test]
    fn test_video_frame_defaults() {
        let video = VideoFrame::default();
        assert!(!video.looped);
        assert!(!video.playing);
        assert_eq!(video.volume, 1.0);

        let list = script(Kind::VideoFrame);
        assert_ends_with(&list, &["Looped", "Playing", "TimePosition", "Video", "Volume"]);
        assert_eq!(list.rendered("Volume"), Some("1"));
        assert_eq!(list.rendered("TimePosition"), Some("0"));
        assert_eq!(
            markup(Kind::VideoFrame).rendered("Playing"),
            Some("<bool name=\"Playing\">false</bool>")
        );
    }

    #[test]
    fn test_canvas_group_defaults() {
        let group = CanvasGroup::default();
        assert_eq!(group.group_color3, Color3::WHITE);
        assert_eq!(group.group_transparency, 0.0);

        let list = script(Kind::CanvasGroup);
        assert_ends_with(&list, &["GroupColor3", "GroupTransparency"]);
        assert_eq!(list.rendered("GroupColor3"), Some("Color3.fromRGB(255, 255, 255)"));
        assert_eq!(list.rendered("BackgroundColor3"), Some("Color3.fromRGB(255, 255, 255)"));
    }

    #[test]
    fn test_screen_gui_defaults() {
        let gui = ScreenGui::default();
        assert!(gui.layer.enabled);
        assert!(gui.layer.reset_on_spawn);
        assert!(gui.clip_to_device_safe_area);
        assert!(!gui.ignore_gui_inset);

        let list = script(Kind::ScreenGui);
        assert!(!list.names().contains(&"Size"));
        assert_ends_with(
            &list,
            &[
                "Enabled",
                "ResetOnSpawn",
                "ZIndexBehavior",
                "ClipToDeviceSafeArea",
                "DisplayOrder",
                "IgnoreGuiInset",
                "SafeAreaCompatibility",
                "ScreenInsets",
            ],
        );
        assert_eq!(list.rendered("ZIndexBehavior"), Some("Enum.ZIndexBehavior.Sibling"));
        assert_eq!(
            list.rendered("SafeAreaCompatibility"),
            Some("Enum.SafeAreaCompatibility.FullscreenExtension")
        );
        assert_eq!(list.rendered("ScreenInsets"), Some("Enum.ScreenInsets.CoreUISafeInsets"));
        assert_eq!(
            markup(Kind::ScreenGui).rendered("ScreenInsets"),
            Some("<token name=\"ScreenInsets\">2</token>")
        );
    }

    #[test]
    fn test_ui_stroke_defaults() {
        let stroke = UIStroke::default();
        assert_eq!(stroke.apply_stroke_mode, ApplyStrokeMode::Contextual);
        assert_eq!(stroke.thickness, 1.0);

        let list = script(Kind::UIStroke);
        assert_eq!(
            list.names(),
            vec![
                "Name",
                "Archivable",
                "ApplyStrokeMode",
                "Color",
                "Enabled",
                "LineJoinMode",
                "Thickness",
                "Transparency",
            ]
        );
        assert_eq!(list.rendered("Color"), Some("Color3.fromRGB(0, 0, 0)"));
        assert_eq!(list.rendered("LineJoinMode"), Some("Enum.LineJoinMode.Round"));
        assert_eq!(list.rendered("Thickness"), Some("1"));
    }

    #[test]
    fn test_ui_padding_defaults() {
        assert_eq!(UIPadding::default().padding_top, UDim::default());

        let list = script(Kind::UIPadding);
        assert_ends_with(&list, &["PaddingBottom", "PaddingLeft", "PaddingRight", "PaddingTop"]);
        for side in ["PaddingBottom", "PaddingLeft", "PaddingRight", "PaddingTop"] {
            assert_eq!(list.rendered(side), Some("UDim.new(0, 0)"), "{side}");
        }
    }

    #[test]
    fn test_ui_scale_defaults() {
        assert_eq!(UIScale::default().scale, 1.0);
        assert_eq!(script(Kind::UIScale).rendered("Scale"), Some("1"));
        assert_eq!(
            markup(Kind::UIScale).rendered("Scale"),
            Some("<float name=\"Scale\">1</float>")
        );
    }

    #[test]
    fn test_ui_gradient_defaults() {
        let gradient = UIGradient::default();
        assert!(gradient.enabled);
        assert_eq!(gradient.color, ColorSequence::solid(Color3::WHITE));
        assert_eq!(gradient.transparency.keypoints().len(), 2);

        let list = script(Kind::UIGradient);
        assert_ends_with(&list, &["Color", "Enabled", "Offset", "Rotation", "Transparency"]);
        assert_eq!(
            list.rendered("Color"),
            Some(
                "ColorSequence.new({ColorSequenceKeypoint.new(0, Color3.fromRGB(255, 255, 255)), \
                 ColorSequenceKeypoint.new(1, Color3.fromRGB(255, 255, 255))})"
            )
        );
        assert_eq!(
            list.rendered("Transparency"),
            Some(
                "NumberSequence.new({NumberSequenceKeypoint.new(0, 0), \
                 NumberSequenceKeypoint.new(1, 0)})"
            )
        );
        assert_eq!(list.rendered("Offset"), Some("Vector2.new(0, 0)"));
    }

    #[test]
    fn test_aspect_ratio_constraint_defaults() {
        let constraint = UIAspectRatioConstraint::default();
        assert_eq!(constraint.aspect_ratio, 1.0);

        let list = script(Kind::UIAspectRatioConstraint);
        assert_ends_with(&list, &["AspectRatio", "AspectType", "DominantAxis"]);
        assert_eq!(list.rendered("AspectType"), Some("Enum.AspectType.FitWithinMaxSize"));
        assert_eq!(list.rendered("DominantAxis"), Some("Enum.DominantAxis.Width"));
    }

    #[test]
    fn test_size_constraint_defaults() {
        let constraint = UISizeConstraint::default();
        assert_eq!(constraint.min_size, Vector2::ZERO);
        assert!(constraint.max_size.x().is_infinite());

        let list = script(Kind::UISizeConstraint);
        assert_ends_with(&list, &["MaxSize", "MinSize"]);
        assert_eq!(list.rendered("MinSize"), Some("Vector2.new(0, 0)"));
        assert_eq!(
            markup(Kind::UISizeConstraint).rendered("MaxSize"),
            Some("<Vector2 name=\"MaxSize\"><X>INF</X><Y>INF</Y></Vector2>")
        );
    }

    #[test]
    fn test_text_size_constraint_defaults() {
        let list = script(Kind::UITextSizeConstraint);
        assert_ends_with(&list, &["MaxTextSize", "MinTextSize"]);
        assert_eq!(list.rendered("MaxTextSize"), Some("100"));
        assert_eq!(list.rendered("MinTextSize"), Some("1"));
        assert_eq!(
            markup(Kind::UITextSizeConstraint).rendered("MaxTextSize"),
            Some("<int name=\"MaxTextSize\">100</int>")
        );
    }

    #[test]
    fn test_list_layout_defaults() {
        let layout = UIListLayout::default();
        assert_eq!(layout.grid.fill_direction, FillDirection::Vertical);
        assert!(!layout.wraps);

        let list = script(Kind::UIListLayout);
        assert_eq!(
            list.names(),
            vec![
                "Name",
                "Archivable",
                "FillDirection",
                "HorizontalAlignment",
                "SortOrder",
                "VerticalAlignment",
                "HorizontalFlex",
                "ItemLineAlignment",
                "Padding",
                "VerticalFlex",
                "Wraps",
            ]
        );
        assert_eq!(list.rendered("FillDirection"), Some("Enum.FillDirection.Vertical"));
        assert_eq!(list.rendered("SortOrder"), Some("Enum.SortOrder.LayoutOrder"));
        assert_eq!(list.rendered("HorizontalFlex"), Some("Enum.UIFlexAlignment.None"));
        assert_eq!(list.rendered("Padding"), Some("UDim.new(0, 0)"));
    }

    #[test]
    fn test_grid_layout_defaults() {
        let layout = UIGridLayout::default();
        assert_eq!(layout.grid.fill_direction, FillDirection::Horizontal);
        assert_eq!(layout.cell_size, UDim2::from_offset(100, 100));

        let list = script(Kind::UIGridLayout);
        assert_ends_with(
            &list,
            &["CellPadding", "CellSize", "FillDirectionMaxCells", "StartCorner"],
        );
        assert_eq!(list.rendered("FillDirection"), Some("Enum.FillDirection.Horizontal"));
        assert_eq!(list.rendered("CellPadding"), Some("UDim2.new(0, 5, 0, 5)"));
        assert_eq!(list.rendered("CellSize"), Some("UDim2.new(0, 100, 0, 100)"));
        assert_eq!(list.rendered("StartCorner"), Some("Enum.StartCorner.TopLeft"));
        assert_eq!(
            markup(Kind::UIGridLayout).rendered("FillDirection"),
            Some("<token name=\"FillDirection\">0</token>")
        );
    }
}
