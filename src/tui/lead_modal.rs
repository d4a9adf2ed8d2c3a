//! Lead capture modal: customer name, optional phone, color and contact.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::services::lead::DEFAULT_CUSTOMER_NAME;
use crate::services::Contact;

/// Focusable fields in the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    /// Customer name input
    Name,
    /// Optional phone input
    Phone,
    /// Send to the owner
    Owner,
    /// Send to the partner
    Partner,
}

impl LeadField {
    const ORDER: [Self; 4] = [Self::Name, Self::Phone, Self::Owner, Self::Partner];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    /// Next field, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous field, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Contact behind a button field.
    #[must_use]
    pub const fn contact(self) -> Option<Contact> {
        match self {
            Self::Owner => Some(Contact::Owner),
            Self::Partner => Some(Contact::Partner),
            Self::Name | Self::Phone => None,
        }
    }
}

/// Inner row of each focusable field.
const NAME_ROW: u16 = 3;
const PHONE_ROW: u16 = 4;
const OWNER_ROW: u16 = 7;
const PARTNER_ROW: u16 = 8;

/// Lead modal widget
pub struct LeadModal;

impl LeadModal {
    /// Field on the given screen row of the modal.
    #[must_use]
    pub fn field_at(area: Rect, row: u16) -> Option<LeadField> {
        let inner_row = row.checked_sub(area.y + 1)?;
        match inner_row {
            NAME_ROW => Some(LeadField::Name),
            PHONE_ROW => Some(LeadField::Phone),
            OWNER_ROW => Some(LeadField::Owner),
            PARTNER_ROW => Some(LeadField::Partner),
            _ => None,
        }
    }

    /// Render the form
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let lead = state.showroom.lead();
        let Some(heading) = lead.heading() else {
            return;
        };
        f.render_widget(Clear, area);

        let focus = state.lead_field;
        let mut lines = vec![
            Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                lead.displacement_line().unwrap_or_default(),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(""),
            Self::input_line(
                "Nombre",
                &lead.name,
                DEFAULT_CUSTOMER_NAME,
                focus == LeadField::Name,
                theme,
            ),
            Self::input_line(
                "Teléfono",
                &lead.phone,
                "opcional",
                focus == LeadField::Phone,
                theme,
            ),
            Self::color_line(lead.selected_color(), lead.colors().len(), theme),
            Line::from(""),
        ];
        for contact in Contact::ALL {
            let field = if contact == Contact::Owner {
                LeadField::Owner
            } else {
                LeadField::Partner
            };
            lines.push(Self::button_line(contact, focus == field, theme));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Consultar por WhatsApp ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(paragraph, area);
    }

    fn input_line(
        label: &str,
        value: &str,
        placeholder: &str,
        focused: bool,
        theme: &Theme,
    ) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let value_span = if value.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(theme.text_muted))
        } else {
            Span::styled(value.to_string(), Style::default().fg(theme.text))
        };
        let mut spans = vec![Span::styled(format!("{label:<10}"), label_style), value_span];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    }

    fn color_line(selected: Option<&str>, count: usize, theme: &Theme) -> Line<'static> {
        let arrows = if count > 1 { ("◀ ", " ▶") } else { ("", "") };
        Line::from(vec![
            Span::styled(format!("{:<10}", "Color"), Style::default().fg(theme.text_secondary)),
            Span::styled(arrows.0, Style::default().fg(theme.accent)),
            Span::styled(
                selected.unwrap_or("-").to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(arrows.1, Style::default().fg(theme.accent)),
        ])
    }

    fn button_line(contact: Contact, focused: bool, theme: &Theme) -> Line<'static> {
        let info = contact.info();
        let style = if focused {
            Style::default()
                .fg(theme.background)
                .bg(theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.success)
        };
        Line::from(Span::styled(format!("[ WhatsApp {} ]", info.name), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(LeadField::Name.next(), LeadField::Phone);
        assert_eq!(LeadField::Partner.next(), LeadField::Name);
        assert_eq!(LeadField::Name.previous(), LeadField::Partner);
        assert_eq!(LeadField::Owner.previous(), LeadField::Phone);
    }

    #[test]
    fn test_button_fields_carry_contacts() {
        assert_eq!(LeadField::Owner.contact(), Some(Contact::Owner));
        assert_eq!(LeadField::Partner.contact(), Some(Contact::Partner));
        assert_eq!(LeadField::Name.contact(), None);
        assert_eq!(LeadField::Phone.contact(), None);
    }

    #[test]
    fn test_field_at_rows() {
        let area = Rect::new(10, 5, 40, 14);
        assert_eq!(LeadModal::field_at(area, 9), Some(LeadField::Name));
        assert_eq!(LeadModal::field_at(area, 10), Some(LeadField::Phone));
        assert_eq!(LeadModal::field_at(area, 13), Some(LeadField::Owner));
        assert_eq!(LeadModal::field_at(area, 14), Some(LeadField::Partner));
        assert_eq!(LeadModal::field_at(area, 5), None);
        assert_eq!(LeadModal::field_at(area, 2), None);
    }
}
