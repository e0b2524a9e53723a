//! End-to-end sessions through the command pipeline and inventory.

use pretty_assertions::assert_eq;
use stockroom::app::{Session, SessionState};
use stockroom::commands::CommandOutput;
use stockroom::inventory::StockLimit;

fn session_after(lines: &[&str]) -> Session {
    let mut session = Session::new();
    for line in lines {
        session.handle_input(line);
    }
    session
}

fn rendered(session: &mut Session, line: &str) -> String {
    session
        .handle_input(line)
        .map(|output| output.to_string())
        .unwrap_or_default()
}

#[test]
fn test_stock_then_list_warehouse() {
    let mut session = session_after(&[
        "ADD PRODUCT \"Blue Widget\" SKU1",
        "ADD WAREHOUSE 1 100",
        "STOCK SKU1 1 50",
    ]);

    assert_eq!(
        rendered(&mut session, "LIST WAREHOUSE 1"),
        "ITEM NAME\t\t\t\t\tSKU\t\t\t\t\t\tQTY\nBlue Widget\t\tSKU1\t\t50"
    );
}

#[test]
fn test_overflow_prompt_then_yes() {
    let mut session = session_after(&["ADD PRODUCT Widget SKU1", "ADD WAREHOUSE 1 10"]);

    let question = session.handle_input("STOCK SKU1 1 15").unwrap();
    assert_eq!(
        question,
        CommandOutput::prompt(
            "Warehouse [1] currently has [0] products stocked and a limit of [10].  Would you like to add [10] instead of [15] to stay within limit? (y/n) "
        )
    );

    assert_eq!(session.handle_input("y"), None);
    assert_eq!(session.state(), &SessionState::Idle);
    assert_eq!(
        session.inventory().warehouse(1).unwrap().quantity("SKU1"),
        Some(10)
    );
}

#[test]
fn test_unknown_command() {
    let mut session = Session::new();
    assert_eq!(
        rendered(&mut session, "foo bar"),
        "ERROR: Command not found [FOO BAR]"
    );
}

#[test]
fn test_duplicate_sku_leaves_catalog_unchanged() {
    let mut session = session_after(&["ADD PRODUCT Widget SKU1"]);

    assert_eq!(
        rendered(&mut session, "ADD PRODUCT Gadget SKU1"),
        "SKU SKU1 already exists.  Product was not added."
    );
    assert_eq!(rendered(&mut session, "LIST PRODUCTS"), "SKU1\tWidget");
}

#[test]
fn test_stock_unstock_round_trip() {
    let mut session = session_after(&[
        "ADD PRODUCT Widget SKU1",
        "ADD WAREHOUSE 7 100",
        "STOCK SKU1 7 30",
        "STOCK SKU1 7 12",
        "UNSTOCK SKU1 7 12",
    ]);

    assert_eq!(
        session.inventory().warehouse(7).unwrap().quantity("SKU1"),
        Some(30)
    );
}

#[test]
fn test_empty_warehouse_placeholder() {
    let mut session = session_after(&["ADD WAREHOUSE 4"]);

    assert_eq!(
        rendered(&mut session, "list warehouse 4"),
        "ITEM NAME\t\t\t\t\tSKU\t\t\t\t\t\tQTY\n(Nothing in stock)"
    );
}

#[test]
fn test_validation_messages_joined() {
    let mut session = Session::new();

    assert_eq!(
        rendered(&mut session, "STOCK SKU1 abc"),
        "ERROR: Expected a number for [WAREHOUSE#] Missing required argument: [QTY]"
    );
}

#[test]
fn test_stock_reports_both_missing() {
    let mut session = Session::new();

    assert_eq!(
        rendered(&mut session, "STOCK SKU9 3 1"),
        "SKU [SKU9] not in product catalog.  Please add the product before attempting to stock. Warehouse # [3] not found.  Please add the warehouse number before attempting to stock."
    );
}

#[test]
fn test_limit_change_confirmed() {
    let mut session = session_after(&["ADD WAREHOUSE 2 50", "ADD WAREHOUSE 2 80"]);
    assert!(session.is_awaiting_confirmation());

    assert_eq!(session.handle_input("Y"), None);
    assert_eq!(
        session.inventory().warehouse(2).unwrap().limit,
        StockLimit::Limited(80)
    );
    assert_eq!(
        rendered(&mut session, "LIST WAREHOUSES"),
        "WAREHOUSE #\t\t\tSTOCK LIMIT\n2\t\t\t\t80"
    );
}

#[test]
fn test_unstock_underflow_declined() {
    let mut session = session_after(&[
        "ADD PRODUCT Widget SKU1",
        "ADD WAREHOUSE 1",
        "STOCK SKU1 1 5",
        "UNSTOCK SKU1 1 9",
    ]);

    assert_eq!(rendered(&mut session, "maybe"), "Please enter y or n.  No changes made.");
    assert_eq!(
        session.inventory().warehouse(1).unwrap().quantity("SKU1"),
        Some(5)
    );
}

#[test]
fn test_unstock_underflow_zeroes_out() {
    let mut session = session_after(&[
        "ADD PRODUCT Widget SKU1",
        "ADD WAREHOUSE 1",
        "STOCK SKU1 1 5",
        "UNSTOCK SKU1 1 9",
        "y",
    ]);

    assert_eq!(
        rendered(&mut session, "LIST WAREHOUSE 1"),
        "ITEM NAME\t\t\t\t\tSKU\t\t\t\t\t\tQTY\n(Nothing in stock)"
    );
}

#[test]
fn test_listing_keeps_insertion_order() {
    let mut session = session_after(&[
        "ADD PRODUCT Zeta Z9",
        "ADD PRODUCT \"Alpha \"Prime\" Widget\" A1",
        "ADD PRODUCT Mid M5",
    ]);

    assert_eq!(
        rendered(&mut session, "LIST PRODUCTS"),
        "Z9\tZeta\nA1\tAlpha 'Prime' Widget\nM5\tMid"
    );
}

#[test]
fn test_unbounded_warehouse_total_overflow_is_an_error() {
    let mut session = session_after(&[
        "ADD PRODUCT A A",
        "ADD PRODUCT B B",
        "ADD PRODUCT C C",
        "ADD WAREHOUSE 1",
        "STOCK A 1 9223372036854775807",
        "STOCK B 1 9223372036854775807",
    ]);

    assert_eq!(
        rendered(&mut session, "STOCK C 1 9223372036854775807"),
        "Warehouse [1] cannot hold [9223372036854775807] more units on top of [18446744073709551614].  No stock added."
    );
    assert_eq!(session.state(), &SessionState::Idle);
    assert_eq!(
        rendered(&mut session, "LIST WAREHOUSES"),
        "WAREHOUSE #\t\t\tSTOCK LIMIT\n1\t\t\t\tInfinity"
    );
}
