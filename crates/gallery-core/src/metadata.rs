//! Metadata client: schema-derived enum options, type descriptions used by
//! auto forms, and role checks against the signed-in session.
//!
//! The gallery talks to the client through the [`MetadataClient`] trait
//! only. [`StaticMetadata`] is the in-memory implementation the demo ships
//! with; nothing here touches the network.

use serde::Serialize;

use crate::data::RoomType;
use crate::error::MetadataError;

/// Role that implicitly holds every other role.
pub const ADMIN_ROLE: &str = "Admin";

/// `(value, label)` pairs in declaration order.
pub type EnumOptions = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumMeta {
    pub name: &'static str,
    pub values: Vec<(&'static str, &'static str)>,
}

/// How a property is edited in an auto-generated form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InputType {
    Text,
    Email,
    Number,
    Date,
    Textarea,
    Checkbox,
    /// Drop-down populated from the named enum.
    Select(&'static str),
}

impl InputType {
    /// Value for the HTML `type` attribute of an `<input>`.
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Text | Self::Textarea | Self::Select(_) => "text",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMeta {
    pub name: &'static str,
    pub input: InputType,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub properties: Vec<PropertyMeta>,
}

impl TypeMeta {
    pub fn property(&self, name: &str) -> Option<&PropertyMeta> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Everything the metadata endpoint describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub base_url: &'static str,
    pub enums: Vec<EnumMeta>,
    pub types: Vec<TypeMeta>,
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_name: String,
    pub display_name: String,
    pub roles: Vec<String>,
}

impl AuthSession {
    pub fn new(user_name: &str, display_name: &str, roles: &[&str]) -> Self {
        Self {
            user_name: user_name.to_string(),
            display_name: display_name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Role check; the admin role holds every role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role || r == ADMIN_ROLE)
    }
}

// ============================================================================
// Client trait
// ============================================================================

/// Capability the gallery pages use to read schema metadata and the session.
pub trait MetadataClient {
    /// The loaded metadata, or [`MetadataError::NotLoaded`].
    fn load_metadata(&self) -> Result<&AppMetadata, MetadataError>;

    /// The signed-in session, if any.
    fn session(&self) -> Option<&AuthSession>;

    /// Options for the named enum.
    fn enum_options(&self, type_name: &str) -> Result<EnumOptions, MetadataError> {
        let metadata = self.load_metadata()?;
        metadata
            .enums
            .iter()
            .find(|e| e.name == type_name)
            .map(|e| {
                e.values
                    .iter()
                    .map(|(v, l)| (v.to_string(), l.to_string()))
                    .collect()
            })
            .ok_or_else(|| MetadataError::UnknownEnum(type_name.to_string()))
    }

    /// Description of the named request/response type.
    fn type_meta(&self, name: &str) -> Result<&TypeMeta, MetadataError> {
        self.load_metadata()?
            .types
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| MetadataError::UnknownType(name.to_string()))
    }

    /// Whether the signed-in user holds `role`. Anonymous users hold none.
    fn has_role(&self, role: &str) -> bool {
        self.session().is_some_and(|s| s.has_role(role))
    }
}

// ============================================================================
// Static implementation
// ============================================================================

/// In-memory metadata for the gallery demos.
#[derive(Clone, Debug, Default)]
pub struct StaticMetadata {
    metadata: Option<AppMetadata>,
    session: Option<AuthSession>,
}

impl StaticMetadata {
    /// Client whose metadata never loaded.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Loaded demo metadata with a manager session.
    pub fn demo(base_url: &'static str) -> Self {
        Self {
            metadata: Some(demo_metadata(base_url)),
            session: Some(AuthSession::new(
                "manager@email.com",
                "Manager",
                &["Employee", "Manager"],
            )),
        }
    }

    pub fn with_session(mut self, session: Option<AuthSession>) -> Self {
        self.session = session;
        self
    }
}

impl MetadataClient for StaticMetadata {
    fn load_metadata(&self) -> Result<&AppMetadata, MetadataError> {
        self.metadata.as_ref().ok_or(MetadataError::NotLoaded)
    }

    fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }
}

fn prop(
    name: &'static str,
    input: InputType,
    required: bool,
    placeholder: Option<&'static str>,
) -> PropertyMeta {
    PropertyMeta {
        name,
        input,
        required,
        placeholder,
    }
}

fn booking_properties() -> Vec<PropertyMeta> {
    vec![
        prop("name", InputType::Text, true, Some("Name for this booking")),
        prop("roomType", InputType::Select("RoomType"), true, None),
        prop("roomNumber", InputType::Number, true, None),
        prop("cost", InputType::Number, true, None),
        prop("bookingStartDate", InputType::Date, true, None),
        prop("bookingEndDate", InputType::Date, false, None),
        prop("notes", InputType::Textarea, false, Some("Notes about this booking")),
    ]
}

fn demo_metadata(base_url: &'static str) -> AppMetadata {
    AppMetadata {
        base_url,
        enums: vec![EnumMeta {
            name: "RoomType",
            values: RoomType::ALL
                .iter()
                .map(|r| (r.as_str(), r.as_str()))
                .collect(),
        }],
        types: vec![
            TypeMeta {
                name: "CreateBooking",
                description: "Create a new Booking",
                properties: booking_properties(),
            },
            TypeMeta {
                name: "UpdateBooking",
                description: "Update an existing Booking",
                properties: booking_properties(),
            },
            TypeMeta {
                name: "CreateCoupon",
                description: "Create a new Coupon",
                properties: vec![
                    prop("id", InputType::Text, true, Some("Coupon code")),
                    prop("description", InputType::Text, true, None),
                    prop("discount", InputType::Number, true, None),
                    prop("expiryDate", InputType::Date, true, None),
                ],
            },
            TypeMeta {
                name: "CreateContact",
                description: "Add a contact",
                properties: vec![
                    prop("firstName", InputType::Text, true, None),
                    prop("lastName", InputType::Text, true, None),
                    prop("email", InputType::Email, true, Some("name@email.com")),
                    prop("subscribe", InputType::Checkbox, false, None),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.org";

    #[test]
    fn test_enum_options() {
        let client = StaticMetadata::demo(URL);
        let options = client.enum_options("RoomType").unwrap();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], ("Single".to_string(), "Single".to_string()));
    }

    #[test]
    fn test_unknown_enum() {
        let client = StaticMetadata::demo(URL);
        assert_eq!(
            client.enum_options("Color"),
            Err(MetadataError::UnknownEnum("Color".to_string()))
        );
    }

    #[test]
    fn test_not_loaded() {
        let client = StaticMetadata::unloaded();
        assert_eq!(client.enum_options("RoomType"), Err(MetadataError::NotLoaded));
        assert!(client.type_meta("CreateBooking").is_err());
    }

    #[test]
    fn test_type_meta() {
        let client = StaticMetadata::demo(URL);
        let meta = client.type_meta("CreateBooking").unwrap();
        assert_eq!(meta.properties.len(), 7);
        assert!(meta.property("name").unwrap().required);
        assert!(!meta.property("notes").unwrap().required);
        assert_eq!(
            client.type_meta("Nope").err(),
            Some(MetadataError::UnknownType("Nope".to_string()))
        );
    }

    #[test]
    fn test_roles() {
        let client = StaticMetadata::demo(URL);
        assert!(client.has_role("Manager"));
        assert!(!client.has_role("Admin"));

        let admin = client
            .clone()
            .with_session(Some(AuthSession::new("admin@email.com", "Admin", &["Admin"])));
        assert!(admin.has_role("Manager"));

        let anon = client.with_session(None);
        assert!(!anon.has_role("Manager"));
    }

    #[test]
    fn test_html_type() {
        assert_eq!(InputType::Date.html_type(), "date");
        assert_eq!(InputType::Select("RoomType").html_type(), "text");
    }
}
