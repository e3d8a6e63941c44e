// crates/ticket-tui/tests/host_behavior.rs

use std::fs;

use ticket_core::translate::msg;
use ticket_core::{OrderType, Side, Translate};
use ticket_tui::app::{App, Focus};
use ticket_tui::config::{ConfigError, TicketConfig};
use ticket_tui::i18n::{Catalog, Locale};

const SAMPLE: &str = r#"
anonymous = false

[market]
base_unit = "btc"
quote_unit = "usdt"

[[balances]]
currency_code = "usdt"
balance = "10"
locked = "2"
"#;

fn sample_app(side: Side, anonymous: bool) -> App {
    let mut config = TicketConfig::from_toml(SAMPLE, "sample").unwrap();
    config.anonymous = anonymous;
    App::new(config.store_view(side), Catalog::new(Locale::En))
}

#[test]
fn config_parses_market_balances_and_flag() {
    let config = TicketConfig::from_toml(SAMPLE, "sample").unwrap();
    assert_eq!(config.market.base_unit, "btc");
    assert_eq!(config.market.quote_unit, "usdt");
    assert_eq!(config.balances.len(), 1);
    assert_eq!(config.balances[0].balance, "10");
    assert!(!config.anonymous);
}

#[test]
fn config_defaults_apply_for_optional_sections() {
    let config = TicketConfig::from_toml(
        "[market]\nbase_unit = \"eth\"\nquote_unit = \"usd\"\n",
        "minimal",
    )
    .unwrap();
    assert!(config.balances.is_empty());
    assert!(!config.anonymous);
}

#[test]
fn config_rejects_bad_toml_and_empty_units() {
    let err = TicketConfig::from_toml("not toml at all {", "bad").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let err = TicketConfig::from_toml(
        "[market]\nbase_unit = \"\"\nquote_unit = \"usd\"\n",
        "empty-base",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMarket(_)));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = TicketConfig::load(&path).unwrap();
    assert_eq!(config, TicketConfig::default());
}

#[test]
fn present_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ticket.toml");
    fs::write(&path, SAMPLE).unwrap();
    let config = TicketConfig::load(&path).unwrap();
    assert_eq!(config.market.quote_unit, "usdt");
}

#[test]
fn catalog_resolves_known_ids_and_falls_back_to_the_id() {
    let en = Catalog::new(Locale::En);
    assert_eq!(en.translate(msg::ORDER_TYPE_LIMIT), "Limit");
    assert_eq!(en.translate("no_such_message"), "no_such_message");

    let es = Catalog::new(Locale::Es);
    assert_eq!(es.translate(msg::ORDER_AMOUNT), "Cantidad");
}

#[test]
fn typing_flows_through_the_reducer_into_the_blotter() {
    let mut app = sample_app(Side::Buy, false);

    app.next_focus(); // Price
    assert_eq!(app.focus, Focus::Price);
    for c in "100.5".chars() {
        app.enter_char(c);
    }
    assert_eq!(app.form.price.as_deref(), Some("100.5"));
    assert!(!app.form.errors.price);

    app.next_focus(); // Amount
    app.enter_char('2');
    app.submit();

    assert_eq!(app.submissions.len(), 1);
    let sent = &app.submissions[0];
    assert_eq!(sent.side, Side::Buy);
    assert_eq!(sent.submission.order_type, OrderType::Limit);
    assert_eq!(sent.submission.price, "100.5");
    assert_eq!(sent.submission.amount, "2");

    // Fields survive the submit.
    assert_eq!(app.form.amount.as_deref(), Some("2"));
}

#[test]
fn backspace_edits_re_run_validation() {
    let mut app = sample_app(Side::Buy, false);
    app.next_focus(); // Price

    for c in "10.5".chars() {
        app.enter_char(c);
    }
    assert!(!app.form.errors.price);

    app.delete_char(); // "10."
    assert!(app.form.errors.price);

    app.delete_char(); // "10"
    assert!(!app.form.errors.price);
}

#[test]
fn quick_amount_keys_fill_the_amount_field() {
    let mut app = sample_app(Side::Buy, false);
    app.quick_amount(0.5);
    assert_eq!(app.form.amount.as_deref(), Some("4"));
    app.quick_amount(1.0);
    assert_eq!(app.form.amount.as_deref(), Some("8"));
}

#[test]
fn anonymous_session_never_reaches_the_blotter() {
    let mut app = sample_app(Side::Sell, true);
    app.next_focus();
    for c in "1".chars() {
        app.enter_char(c);
    }
    app.next_focus();
    app.enter_char('1');
    app.submit();
    assert!(app.submissions.is_empty());
    assert!(!app.form.errors.any());
}

#[test]
fn clearing_the_type_then_toggling_reselects_limit() {
    let mut app = sample_app(Side::Buy, false);
    app.clear_order_type();
    assert_eq!(app.form.order_type, None);
    assert!(app.form.errors.order_type);

    app.toggle_order_type();
    assert_eq!(app.form.order_type, Some(OrderType::Limit));
    assert!(!app.form.errors.order_type);

    app.toggle_order_type();
    assert_eq!(app.form.order_type, Some(OrderType::Market));
}

#[test]
fn invalid_submit_leaves_the_blotter_untouched() {
    let mut app = sample_app(Side::Buy, false);
    app.submit(); // price and amount never entered
    assert!(app.submissions.is_empty());
    assert!(app.form.errors.price);
    assert!(app.form.errors.amount);
    assert!(!app.form.errors.order_type);
}
