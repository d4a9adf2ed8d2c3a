//! Lead capture: the advice request form and the outbound messaging link.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::branding::{MESSAGING_HOST, OWNER_CONTACT, PARTNER_CONTACT};
use crate::models::Model;

/// Name used when the customer leaves the field blank.
pub const DEFAULT_CUSTOMER_NAME: &str = "Cliente";

/// A fixed messaging contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    /// Display name
    pub name: &'static str,
    /// Number used in the deep link
    pub number: &'static str,
}

/// Which of the two dealership contacts receives the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Contact {
    /// The dealership owner
    Owner,
    /// The business partner
    Partner,
}

impl Contact {
    /// Both contacts in display order.
    pub const ALL: [Self; 2] = [Self::Owner, Self::Partner];

    /// Fixed identity for this contact.
    pub const fn info(self) -> ContactInfo {
        match self {
            Self::Owner => OWNER_CONTACT,
            Self::Partner => PARTNER_CONTACT,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Partner => write!(f, "partner"),
        }
    }
}

impl FromStr for Contact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "partner" => Ok(Self::Partner),
            other => Err(format!("unknown contact '{other}' (expected owner or partner)")),
        }
    }
}

/// A submitted advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    /// Customer name (never blank)
    pub customer: String,
    /// Phone as typed; collected but not part of the message
    pub phone: Option<String>,
    /// Brand display name
    pub brand: String,
    /// Model name
    pub model: String,
    /// Displacement in cc
    pub displacement: u32,
    /// Chosen color
    pub color: String,
    /// Receiving contact
    pub contact: Contact,
    /// Plain-text message
    pub message: String,
    /// Messaging deep link
    pub link: String,
}

/// Builds the fixed-template message.
pub fn build_message(customer: &str, brand: &str, model: &str, cc: u32, color: &str) -> String {
    format!(
        "Hola, soy {customer}. Me interesa el modelo {brand} {model} ({cc}cc) color {color}. \
         Consulto por precio y opciones de financiación. Gracias."
    )
}

/// Builds the messaging deep link for a contact.
pub fn deep_link(contact: Contact, message: &str) -> String {
    format!(
        "https://{MESSAGING_HOST}/{}?text={}",
        contact.info().number,
        encode_uri_component(message)
    )
}

/// Percent-encodes a string the way `encodeURIComponent` does.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) pass through;
/// every other UTF-8 byte becomes `%XX` with uppercase hex.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        let unreserved = byte.is_ascii_alphanumeric()
            || matches!(
                byte,
                b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
            );
        if unreserved {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// The model a lead form is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadTarget {
    /// Brand display name
    pub brand: String,
    /// Model record
    pub model: Model,
}

/// State of the lead capture modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    target: Option<LeadTarget>,
    /// Customer name input
    pub name: String,
    /// Phone input
    pub phone: String,
    color_index: usize,
}

impl LeadForm {
    /// Closed form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form for a model.
    ///
    /// The color selector starts at `preselected` when it is one of the
    /// model's colors, otherwise at the first color. Inputs are kept from the
    /// previous opening.
    pub fn open(&mut self, brand: &str, model: &Model, preselected: Option<&str>) {
        self.color_index = preselected
            .and_then(|label| model.color_index(label))
            .unwrap_or(0);
        self.target = Some(LeadTarget {
            brand: brand.to_string(),
            model: model.clone(),
        });
    }

    /// Hides the form.
    pub fn close(&mut self) {
        self.target = None;
    }

    /// True while the form is shown.
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Model the form is about.
    pub fn target(&self) -> Option<&LeadTarget> {
        self.target.as_ref()
    }

    /// Summary heading: "<brand> <model>".
    pub fn heading(&self) -> Option<String> {
        self.target
            .as_ref()
            .map(|t| format!("{} {}", t.brand, t.model.name))
    }

    /// Summary detail: "Cilindrada: <cc>cc".
    pub fn displacement_line(&self) -> Option<String> {
        self.target
            .as_ref()
            .map(|t| format!("Cilindrada: {}cc", t.model.displacement))
    }

    /// Color currently chosen in the selector.
    pub fn selected_color(&self) -> Option<&str> {
        let target = self.target.as_ref()?;
        target.model.colors.get(self.color_index).map(String::as_str)
    }

    /// Colors offered by the selector.
    pub fn colors(&self) -> &[String] {
        match &self.target {
            Some(target) => &target.model.colors,
            None => &[],
        }
    }

    /// Selects a color by label. Unknown labels are ignored.
    pub fn choose_color(&mut self, label: &str) {
        if let Some(index) = self.target.as_ref().and_then(|t| t.model.color_index(label)) {
            self.color_index = index;
        }
    }

    /// Moves the selector forward, wrapping.
    pub fn next_color(&mut self) {
        let count = self.colors().len();
        if count > 0 {
            self.color_index = (self.color_index + 1) % count;
        }
    }

    /// Moves the selector back, wrapping.
    pub fn previous_color(&mut self) {
        let count = self.colors().len();
        if count > 0 {
            self.color_index = (self.color_index + count - 1) % count;
        }
    }

    /// Builds the lead for `contact`. `None` when the form is closed.
    pub fn submit(&self, contact: Contact) -> Option<Lead> {
        let target = self.target.as_ref()?;
        let customer = match self.name.trim() {
            "" => DEFAULT_CUSTOMER_NAME.to_string(),
            name => name.to_string(),
        };
        let phone = match self.phone.trim() {
            "" => None,
            phone => Some(phone.to_string()),
        };
        let color = self.selected_color().unwrap_or_default().to_string();

        let message = build_message(
            &customer,
            &target.brand,
            &target.model.name,
            target.model.displacement,
            &color,
        );
        let link = deep_link(contact, &message);

        Some(Lead {
            customer,
            phone,
            brand: target.brand.clone(),
            model: target.model.name.clone(),
            displacement: target.model.displacement,
            color,
            contact,
            message,
            link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cg125() -> Model {
        Model::new(
            "CG 125",
            125,
            &["Rojo", "Negro", "Blanco"],
            &["images/honda_cg125_1.jpg"],
        )
    }

    #[test]
    fn test_message_template() {
        assert_eq!(
            build_message("Juan", "Honda", "CG 125", 125, "Rojo"),
            "Hola, soy Juan. Me interesa el modelo Honda CG 125 (125cc) color Rojo. \
             Consulto por precio y opciones de financiación. Gracias."
        );
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Hola, soy Juan."), "Hola%2C%20soy%20Juan.");
        assert_eq!(encode_uri_component("(125cc)"), "(125cc)");
        assert_eq!(encode_uri_component("financiación"), "financiaci%C3%B3n");
        assert_eq!(encode_uri_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(encode_uri_component("-_.!~*'"), "-_.!~*'");
    }

    #[test]
    fn test_submit_scenario() {
        let mut form = LeadForm::new();
        form.open("Honda", &cg125(), Some("Rojo"));
        form.name = "Juan".to_string();

        let lead = form.submit(Contact::Owner).unwrap();
        assert_eq!(
            lead.message,
            "Hola, soy Juan. Me interesa el modelo Honda CG 125 (125cc) color Rojo. \
             Consulto por precio y opciones de financiación. Gracias."
        );
        assert_eq!(
            lead.link,
            "https://wa.me/5493572592411?text=Hola%2C%20soy%20Juan.%20Me%20interesa%20el%20\
             modelo%20Honda%20CG%20125%20(125cc)%20color%20Rojo.%20Consulto%20por%20precio%20\
             y%20opciones%20de%20financiaci%C3%B3n.%20Gracias."
        );
    }

    #[test]
    fn test_blank_name_defaults_and_phone_not_in_message() {
        let mut form = LeadForm::new();
        form.open("Honda", &cg125(), None);
        form.name = "   ".to_string();
        form.phone = "3572 555 555".to_string();

        let lead = form.submit(Contact::Partner).unwrap();
        assert_eq!(lead.customer, DEFAULT_CUSTOMER_NAME);
        assert_eq!(lead.phone.as_deref(), Some("3572 555 555"));
        assert!(!lead.message.contains("3572"));
        assert!(lead.link.starts_with("https://wa.me/5493572501539?text="));
    }

    #[test]
    fn test_color_selector_defaults() {
        let mut form = LeadForm::new();
        form.open("Honda", &cg125(), Some("Negro"));
        assert_eq!(form.selected_color(), Some("Negro"));

        form.open("Honda", &cg125(), Some("Verde"));
        assert_eq!(form.selected_color(), Some("Rojo"));

        form.open("Honda", &cg125(), None);
        assert_eq!(form.selected_color(), Some("Rojo"));
    }

    #[test]
    fn test_color_cycling_wraps() {
        let mut form = LeadForm::new();
        form.open("Honda", &cg125(), None);
        form.previous_color();
        assert_eq!(form.selected_color(), Some("Blanco"));
        form.next_color();
        assert_eq!(form.selected_color(), Some("Rojo"));
        form.choose_color("Negro");
        assert_eq!(form.selected_color(), Some("Negro"));
    }

    #[test]
    fn test_closed_form_does_not_submit() {
        let form = LeadForm::new();
        assert!(form.submit(Contact::Owner).is_none());
        assert!(form.heading().is_none());
    }

    #[test]
    fn test_contact_parsing() {
        assert_eq!("owner".parse::<Contact>(), Ok(Contact::Owner));
        assert_eq!("Partner".parse::<Contact>(), Ok(Contact::Partner));
        assert!("boss".parse::<Contact>().is_err());
    }
}
