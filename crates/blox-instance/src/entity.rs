//! Entities: one Roblox instance each.

use crate::classes::*;
use crate::kind::Kind;
use crate::props::PropertyList;
use blox_core::{EntityId, Format};

macro_rules! classes {
    ($($variant:ident),+ $(,)?) => {
        /// Class-specific properties of an entity.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Class {
            $($variant($variant)),+
        }

        impl Class {
            pub fn kind(&self) -> Kind {
                match self {
                    $(Class::$variant(_) => Kind::$variant),+
                }
            }

            /// Studio defaults for a class.
            pub fn default_for(kind: Kind) -> Self {
                match kind {
                    $(Kind::$variant => Class::$variant($variant::default())),+
                }
            }

            /// Write the full flattened property set of this class.
            pub fn write(&self, list: &mut PropertyList) {
                match self {
                    $(Class::$variant(class) => class.write(list)),+
                }
            }
        }

        $(
            impl From<$variant> for Class {
                fn from(class: $variant) -> Self {
                    Class::$variant(class)
                }
            }
        )+
    };
}

classes! {
    Frame,
    ScrollingFrame,
    TextLabel,
    TextButton,
    TextBox,
    ImageLabel,
    ImageButton,
    VideoFrame,
    ViewportFrame,
    CanvasGroup,
    ScreenGui,
    UICorner,
    UIStroke,
    UIPadding,
    UIScale,
    UIGradient,
    UIAspectRatioConstraint,
    UISizeConstraint,
    UITextSizeConstraint,
    UIListLayout,
    UIGridLayout,
    Camera,
    LocalizationTable,
}

/// One instance: identity, tree position, and class properties.
///
/// Built with the `with_*` methods, then handed to a
/// [`Scene`](crate::scene::Scene), after which it is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    archivable: bool,
    parent: Option<EntityId>,
    class: Class,
}

impl Entity {
    /// A new entity named after its class.
    pub fn new(class: impl Into<Class>) -> Self {
        let class = class.into();
        Self {
            name: class.kind().class_name().to_string(),
            archivable: true,
            parent: None,
            class,
        }
    }

    /// A default-valued entity of `kind`.
    pub fn of_kind(kind: Kind) -> Self {
        Self::new(Class::default_for(kind))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_archivable(mut self, archivable: bool) -> Self {
        self.archivable = archivable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archivable(&self) -> bool {
        self.archivable
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn kind(&self) -> Kind {
        self.class.kind()
    }

    /// Write instance-level properties, then the class's own.
    ///
    /// Model files do not store `Archivable`; non-archivable instances are
    /// left out of them instead.
    pub fn write_properties(&self, list: &mut PropertyList) {
        list.push("Name", &self.name);
        if list.format() == Format::Script {
            list.push("Archivable", &self.archivable);
        }
        self.class.write(list);
    }

    /// Properties of this entity rendered for `format`.
    pub fn properties(&self, format: Format) -> PropertyList {
        let mut list = PropertyList::new(format);
        self.write_properties(&mut list);
        list
    }
}
