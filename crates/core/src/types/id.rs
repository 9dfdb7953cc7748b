//! Newtype IDs for type-safe host entity references.
//!
//! Use the `define_gid!` macro to create type-safe wrappers around the
//! host's opaque global identifiers (e.g. `gid://shopify/CartLine/1`) so
//! that ids from different entity types cannot be mixed.

/// Macro to define a type-safe global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use volume_discount_core::define_gid;
/// define_gid!(OrderGid);
/// define_gid!(ProductGid);
///
/// let order = OrderGid::new("gid://shopify/Order/1");
/// let product = ProductGid::new("gid://shopify/Product/1");
///
/// // These are different types, so this won't compile:
/// // let _: OrderGid = product;
/// # assert_eq!(order.as_str(), "gid://shopify/Order/1");
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the id is blank.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_gid!(CartLineId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_gid() {
        let id = CartLineId::new("gid://shopify/CartLine/1");
        assert_eq!(id.to_string(), "gid://shopify/CartLine/1");
    }

    #[test]
    fn test_serde_transparent() {
        let id = CartLineId::from("gid://shopify/CartLine/7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gid://shopify/CartLine/7\"");

        let parsed: CartLineId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_is_blank() {
        assert!(CartLineId::new("").is_blank());
        assert!(CartLineId::new("   ").is_blank());
        assert!(!CartLineId::new("gid://shopify/CartLine/1").is_blank());
    }
}
