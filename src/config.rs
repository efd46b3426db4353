//! Application configuration constants
//!
//! Central location for contact defaults, the launch menu, polling cadence,
//! and validation boundaries used throughout the application.

use crate::models::MenuItem;
use std::time::Duration;

// ===== Contact Defaults =====

/// Placeholder contact email shown until the admin saves their own
pub const DEFAULT_CONTACT_EMAIL: &str = "tua.email@pizzeria.com";

/// Placeholder WhatsApp number (international prefix first, digits only)
pub const DEFAULT_WHATSAPP_NUMBER: &str = "391234567890";

/// Fallback image for the "about us" section
pub const DEFAULT_ABOUT_IMAGE: &str = "https://picsum.photos/seed/pizzeria/600/600";

// ===== Admin Settings Limits =====

/// Minimum admin password length enforced at first-run setup
pub const MIN_ADMIN_PASSWORD_LEN: usize = 6;

// ===== Polling =====

/// How often the armed poller re-reads orders and customers from disk
pub const ORDER_POLL_INTERVAL: Duration = Duration::from_secs(30);

// ===== Launch Menu =====

/// The six pizzas a fresh data directory opens with
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Margherita Classica".to_string(),
            description: "Mozzarella fresca, pomodori San Marzano, basilico fresco e un filo d'olio extra vergine d'oliva.".to_string(),
            price: 12.50,
            image_url: "https://picsum.photos/seed/margherita/600/400".to_string(),
        },
        MenuItem {
            id: 2,
            name: "Festa di Salamino Piccante".to_string(),
            description: "Un generoso strato di salamino piccante su mozzarella fusa e la nostra salsa di pomodoro firmata.".to_string(),
            price: 14.00,
            image_url: "https://picsum.photos/seed/pepperoni/600/400".to_string(),
        },
        MenuItem {
            id: 3,
            name: "Verdure dell'Ortolano".to_string(),
            description: "Una delizia del giardino con zucchine grigliate, peperoni, melanzane e cipolle su una base di formaggio.".to_string(),
            price: 13.50,
            image_url: "https://picsum.photos/seed/veggie/600/400".to_string(),
        },
        MenuItem {
            id: 4,
            name: "Quattro Formaggi".to_string(),
            description: "Il sogno di ogni amante del formaggio con mozzarella, gorgonzola, parmigiano e ricotta.".to_string(),
            price: 15.00,
            image_url: "https://picsum.photos/seed/cheese/600/400".to_string(),
        },
        MenuItem {
            id: 5,
            name: "Prosciutto e Funghi".to_string(),
            description: "Combinazione classica di saporito prosciutto cotto e funghi.".to_string(),
            price: 14.50,
            image_url: "https://picsum.photos/seed/prosciutto/600/400".to_string(),
        },
        MenuItem {
            id: 6,
            name: "Diavola".to_string(),
            description: "Salame piccante, scaglie di peperoncino e olive nere per un tocco di fuoco.".to_string(),
            price: 14.00,
            image_url: "https://picsum.photos/seed/diavola/600/400".to_string(),
        },
    ]
}
