//! Roblox enum types used by instance properties.
//!
//! Scripts refer to an item as `Enum.<Type>.<Item>`; model files store the
//! item's numeric value in a `<token>` tag.

use crate::types::PropertyValue;

macro_rules! roblox_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $($variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every item, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of the enum type in the Roblox API.
            pub const ENUM_NAME: &'static str = stringify!($name);

            /// Item name as scripts spell it.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Numeric value stored in model files.
            pub fn value(self) -> u32 {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl PropertyValue for $name {
            fn to_lua(&self) -> String {
                format!("Enum.{}.{}", Self::ENUM_NAME, self.name())
            }

            fn to_xml(&self, name: &str) -> String {
                format!("<token name=\"{}\">{}</token>", name, self.value())
            }
        }
    };
}

roblox_enum! {
    AutomaticSize (default None) { None = 0, X = 1, Y = 2, XY = 3 }
}

roblox_enum! {
    BorderMode (default Outline) { Outline = 0, Middle = 1, Inset = 2 }
}

roblox_enum! {
    SizeConstraint (default RelativeXY) { RelativeXY = 0, RelativeXX = 1, RelativeYY = 2 }
}

roblox_enum! {
    SelectionBehavior (default Escape) { Escape = 0, Stop = 1 }
}

roblox_enum! {
    /// Legacy frame skins.
    FrameStyle (default Custom) {
        Custom = 0,
        ChatBlue = 1,
        RobloxSquare = 2,
        RobloxRound = 3,
        ChatGreen = 4,
        ChatRed = 5,
        DropShadow = 6,
    }
}

roblox_enum! {
    /// Legacy button skins.
    ButtonStyle (default Custom) {
        Custom = 0,
        RobloxButtonDefault = 1,
        RobloxButton = 2,
        RobloxRoundButton = 3,
        RobloxRoundDefaultButton = 4,
        RobloxRoundDropdownButton = 5,
    }
}

roblox_enum! {
    TextXAlignment (default Center) { Left = 0, Right = 1, Center = 2 }
}

roblox_enum! {
    TextYAlignment (default Center) { Top = 0, Center = 1, Bottom = 2 }
}

roblox_enum! {
    TextTruncate (default None) { None = 0, AtEnd = 1, SplitWord = 2 }
}

roblox_enum! {
    TextDirection (default Auto) { Auto = 0, LeftToRight = 1, RightToLeft = 2 }
}

roblox_enum! {
    FontWeight (default Regular) {
        Thin = 100,
        ExtraLight = 200,
        Light = 300,
        Regular = 400,
        Medium = 500,
        SemiBold = 600,
        Bold = 700,
        ExtraBold = 800,
        Heavy = 900,
    }
}

impl FontWeight {
    /// Closest weight to a CSS-style numeric weight.
    pub fn from_numeric(weight: u32) -> Self {
        let mut best = FontWeight::Regular;
        for &candidate in Self::ALL {
            if candidate.value().abs_diff(weight) < best.value().abs_diff(weight) {
                best = candidate;
            }
        }
        best
    }
}

roblox_enum! {
    FontStyle (default Normal) { Normal = 0, Italic = 1 }
}

roblox_enum! {
    ScaleType (default Stretch) { Stretch = 0, Slice = 1, Tile = 2, Fit = 3, Crop = 4 }
}

roblox_enum! {
    ResamplerMode (default Default) { Default = 0, Pixelated = 1 }
}

roblox_enum! {
    ScrollingDirection (default XY) { X = 1, Y = 2, XY = 4 }
}

roblox_enum! {
    ElasticBehavior (default WhenScrollable) { WhenScrollable = 0, Always = 1, Never = 2 }
}

roblox_enum! {
    ScrollBarInset (default None) { None = 0, ScrollBar = 1, Always = 2 }
}

roblox_enum! {
    VerticalScrollBarPosition (default Right) { Right = 0, Left = 1 }
}

roblox_enum! {
    ZIndexBehavior (default Sibling) { Global = 0, Sibling = 1 }
}

roblox_enum! {
    ScreenInsets (default CoreUISafeInsets) {
        None = 0,
        DeviceSafeInsets = 1,
        CoreUISafeInsets = 2,
        TopbarSafeInsets = 3,
    }
}

roblox_enum! {
    SafeAreaCompatibility (default FullscreenExtension) { None = 0, FullscreenExtension = 1 }
}

roblox_enum! {
    ApplyStrokeMode (default Contextual) { Contextual = 0, Border = 1 }
}

roblox_enum! {
    LineJoinMode (default Round) { Round = 0, Bevel = 1, Miter = 2 }
}

roblox_enum! {
    AspectType (default FitWithinMaxSize) { FitWithinMaxSize = 0, ScaleWithParentSize = 1 }
}

roblox_enum! {
    DominantAxis (default Width) { Width = 0, Height = 1 }
}

roblox_enum! {
    FillDirection (default Vertical) { Horizontal = 0, Vertical = 1 }
}

roblox_enum! {
    HorizontalAlignment (default Left) { Center = 0, Left = 1, Right = 2 }
}

roblox_enum! {
    VerticalAlignment (default Top) { Center = 0, Top = 1, Bottom = 2 }
}

roblox_enum! {
    SortOrder (default LayoutOrder) { Name = 0, Custom = 1, LayoutOrder = 2 }
}

roblox_enum! {
    StartCorner (default TopLeft) { TopLeft = 0, TopRight = 1, BottomLeft = 2, BottomRight = 3 }
}

roblox_enum! {
    UIFlexAlignment (default None) {
        None = 0,
        Fill = 1,
        SpaceAround = 2,
        SpaceBetween = 3,
        SpaceEvenly = 4,
    }
}

roblox_enum! {
    ItemLineAlignment (default Automatic) {
        Automatic = 0,
        Start = 1,
        Center = 2,
        End = 3,
        Stretch = 4,
    }
}

roblox_enum! {
    CameraType (default Fixed) {
        Fixed = 0,
        Attach = 1,
        Watch = 2,
        Track = 3,
        Follow = 4,
        Custom = 5,
        Scriptable = 6,
        Orbital = 7,
    }
}

roblox_enum! {
    FieldOfViewMode (default Vertical) { Vertical = 0, Diagonal = 1, MaxAxis = 2 }
}
