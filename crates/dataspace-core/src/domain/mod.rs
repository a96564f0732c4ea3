//! # Data Space Core - Domain Module
//! 
//! Entities owned by the mock service layer, plus the banner model.

/// A wire name that matches no variant of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// String-backed enumeration with wire name and display label.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err($crate::domain::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod entity;
pub mod company;
pub mod data_source;
pub mod product;
pub mod order;
pub mod organization;
pub mod role;
pub mod trust_space;
pub mod user;

// Re-export all entities and enums
pub use entity::{Entity, EntityPatch};
pub use company::{CompanyInfo, CompanyUser};
pub use data_source::{DataSource, DataSourceDraft, DataSourceKind, DataSourcePatch, DataSourceType};
pub use product::{
    ApplicationField, BillingMode, DataFormat, DataProduct, ProductDraft, ProductPatch, ProductType,
    TransferMode,
};
pub use order::{Order, OrderDraft, OrderPatch, OrderStatus, PurchaseType};
pub use organization::{MemberRef, Organization, OrganizationDraft, OrganizationPatch};
pub use role::{Role, RoleAction, RoleDraft, RolePatch};
pub use trust_space::{TrustSpace, TrustSpaceDraft, TrustSpacePatch};
pub use user::{User, UserDraft, UserPatch, UserStatus};
