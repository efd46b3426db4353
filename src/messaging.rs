//! Order hand-off messaging
//!
//! Orders reach the pizzeria as a message the customer sends themself:
//! the confirmation screen offers a WhatsApp link and a mailto link, both
//! carrying the same pre-filled order summary.

use crate::models::{Customer, Order};

/// Euro amount with two decimals and a comma separator, e.g. "39,00 €"
pub fn format_eur(amount: f64) -> String {
    format!("{:.2} €", amount).replace('.', ",")
}

/// Plain-text order summary, one line per cart item
pub fn order_summary(order: &Order, customer: &Customer) -> String {
    let items = order
        .items
        .iter()
        .map(|line| format!("- {}x {}", line.quantity, line.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Nuovo Ordine #{}\n\nCliente: {} {}\nTelefono: {}\n\nDettagli:\n{}\n\nTOTALE: {}\n\nGrazie!",
        order.id,
        customer.name,
        customer.surname,
        customer.phone,
        items,
        format_eur(order.total)
    )
}

/// mailto URL for the pizzeria inbox.
///
/// Subject and body are both percent-encoded; a raw "#" in the subject
/// would be read as a fragment and cut the URL short.
pub fn mailto_link(email: &str, order: &Order, customer: &Customer) -> String {
    let subject = format!("Nuovo Ordine #{}", order.id);
    let body = order_summary(order, customer);
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// wa.me URL for the pizzeria WhatsApp number (digits only, country code
/// included)
pub fn whatsapp_link(number: &str, order: &Order, customer: &Customer) -> String {
    let text = order_summary(order, customer);
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CartLine, OrderStatus};
    use chrono::Utc;

    fn sample_order_and_customer() -> (Order, Customer) {
        let customer = Customer {
            id: 2,
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            phone: "3331112222".to_string(),
        };
        let order = Order {
            id: 42,
            customer_id: customer.id,
            items: vec![
                CartLine {
                    id: 1,
                    name: "Margherita Classica".to_string(),
                    description: String::new(),
                    price: 12.50,
                    image_url: String::new(),
                    quantity: 2,
                },
                CartLine {
                    id: 6,
                    name: "Diavola".to_string(),
                    description: String::new(),
                    price: 14.00,
                    image_url: String::new(),
                    quantity: 1,
                },
            ],
            total: 39.00,
            placed_at: Utc::now(),
            status: OrderStatus::Preparing,
        };
        (order, customer)
    }

    #[test]
    fn test_format_eur_uses_comma_separator() {
        assert_eq!(format_eur(39.00), "39,00 €");
        assert_eq!(format_eur(12.5), "12,50 €");
        assert_eq!(format_eur(0.0), "0,00 €");
    }

    #[test]
    fn test_order_summary_exact_layout() {
        let (order, customer) = sample_order_and_customer();

        let summary = order_summary(&order, &customer);

        assert_eq!(
            summary,
            "Nuovo Ordine #42\n\n\
             Cliente: Mario Rossi\n\
             Telefono: 3331112222\n\n\
             Dettagli:\n\
             - 2x Margherita Classica\n\
             - 1x Diavola\n\n\
             TOTALE: 39,00 €\n\n\
             Grazie!"
        );
    }

    #[test]
    fn test_mailto_link_encodes_subject_and_body() {
        let (order, customer) = sample_order_and_customer();

        let link = mailto_link("ordini@pizzeria.it", &order, &customer);

        assert!(link.starts_with("mailto:ordini@pizzeria.it?subject=Nuovo%20Ordine%20%2342&body="));
        // Nothing that could break the URL survives unencoded
        assert!(!link.contains('#'));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn test_whatsapp_link_targets_the_configured_number() {
        let (order, customer) = sample_order_and_customer();

        let link = whatsapp_link("393471234567", &order, &customer);

        assert!(link.starts_with("https://wa.me/393471234567?text=Nuovo%20Ordine%20%2342"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("TOTALE%3A%2039%2C00%20%E2%82%AC"));
    }
}
