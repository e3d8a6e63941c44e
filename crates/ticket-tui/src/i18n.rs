//! Static message catalog implementing the core's localization seam.
//!
//! Two locales ship built in; unknown ids fall back to the id itself
//! so a missing message is visible rather than fatal.

use ticket_core::translate::msg;
use ticket_core::Translate;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }
}

/// Message catalog for one locale.
#[derive(Debug, Copy, Clone)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Catalog { locale }
    }

    fn lookup(self, id: &str) -> Option<&'static str> {
        match self.locale {
            Locale::En => lookup_en(id),
            Locale::Es => lookup_es(id),
        }
    }
}

impl Translate for Catalog {
    fn translate(&self, id: &str) -> String {
        match self.lookup(id) {
            Some(text) => text.to_string(),
            None => id.to_string(),
        }
    }
}

fn lookup_en(id: &str) -> Option<&'static str> {
    match id {
        msg::ORDER_BALANCE => Some("balance"),
        msg::ORDER_TYPE => Some("Type"),
        msg::ORDER_PRICE => Some("Price"),
        msg::ORDER_AMOUNT => Some("Amount"),
        msg::ORDER_BUY => Some("Buy"),
        msg::ORDER_SELL => Some("Sell"),
        msg::ORDER_TYPE_LIMIT => Some("Limit"),
        msg::ORDER_TYPE_MARKET => Some("Market"),
        msg::ORDER_ANONYMOUS => Some("Sign in to trade"),
        _ => None,
    }
}

fn lookup_es(id: &str) -> Option<&'static str> {
    match id {
        msg::ORDER_BALANCE => Some("saldo"),
        msg::ORDER_TYPE => Some("Tipo"),
        msg::ORDER_PRICE => Some("Precio"),
        msg::ORDER_AMOUNT => Some("Cantidad"),
        msg::ORDER_BUY => Some("Comprar"),
        msg::ORDER_SELL => Some("Vender"),
        msg::ORDER_TYPE_LIMIT => Some("Límite"),
        msg::ORDER_TYPE_MARKET => Some("Mercado"),
        msg::ORDER_ANONYMOUS => Some("Inicia sesión para operar"),
        _ => None,
    }
}
