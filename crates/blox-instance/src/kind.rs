//! The closed set of instance classes the converter can emit.

use blox_core::ConversionError;
use std::fmt;
use std::str::FromStr;

/// Broad grouping of classes, used to check what a reference may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Visible 2D elements (frames, labels, buttons, images, ...).
    GuiObject,
    /// Top-level containers such as ScreenGui.
    LayerCollector,
    /// Modifiers, constraints and layouts attached to a GuiObject.
    UiComponent,
    Camera,
    LocalizationTable,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::GuiObject => "GuiObject",
            Category::LayerCollector => "LayerCollector",
            Category::UiComponent => "UIComponent",
            Category::Camera => "Camera",
            Category::LocalizationTable => "LocalizationTable",
        };
        f.write_str(name)
    }
}

macro_rules! kinds {
    ($($variant:ident => $category:ident),+ $(,)?) => {
        /// Discriminant naming the Roblox class of an entity.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Kind {
            $($variant),+
        }

        impl Kind {
            /// Every supported class.
            pub const ALL: &'static [Kind] = &[$(Kind::$variant),+];

            /// Roblox class name.
            pub fn class_name(self) -> &'static str {
                match self {
                    $(Kind::$variant => stringify!($variant)),+
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $(Kind::$variant => Category::$category),+
                }
            }
        }

        impl FromStr for Kind {
            type Err = ConversionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Kind::$variant),)+
                    other => Err(ConversionError::UnknownKind(other.to_string())),
                }
            }
        }
    };
}

kinds! {
    Frame => GuiObject,
    ScrollingFrame => GuiObject,
    TextLabel => GuiObject,
    TextButton => GuiObject,
    TextBox => GuiObject,
    ImageLabel => GuiObject,
    ImageButton => GuiObject,
    VideoFrame => GuiObject,
    ViewportFrame => GuiObject,
    CanvasGroup => GuiObject,
    ScreenGui => LayerCollector,
    UICorner => UiComponent,
    UIStroke => UiComponent,
    UIPadding => UiComponent,
    UIScale => UiComponent,
    UIGradient => UiComponent,
    UIAspectRatioConstraint => UiComponent,
    UISizeConstraint => UiComponent,
    UITextSizeConstraint => UiComponent,
    UIListLayout => UiComponent,
    UIGridLayout => UiComponent,
    Camera => Camera,
    LocalizationTable => LocalizationTable,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// What a reference-valued property is allowed to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTarget {
    Kind(Kind),
    Category(Category),
}

impl RefTarget {
    pub fn accepts(self, kind: Kind) -> bool {
        match self {
            RefTarget::Kind(expected) => expected == kind,
            RefTarget::Category(expected) => expected == kind.category(),
        }
    }
}

impl fmt::Display for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefTarget::Kind(kind) => write!(f, "a {}", kind),
            RefTarget::Category(category) => write!(f, "a {}", category),
        }
    }
}
