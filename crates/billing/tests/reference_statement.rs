//! Black-box check of the full statement pipeline on the reference invoice.

use playbill_billing::{
    CurrencyFormat, Customer, Genre, Invoice, OutputKind, PerformanceRequest, Play, PlayCatalog,
    StatementError, create_statement_data, render, statement,
};

fn plays() -> PlayCatalog {
    [
        ("hamlet", Play::new("Hamlet", Genre::Tragedy)),
        ("as-like", Play::new("As You Like It", Genre::Comedy)),
        ("othello", Play::new("Othello", Genre::Tragedy)),
    ]
    .into_iter()
    .collect()
}

fn big_co() -> Invoice {
    Invoice::new(
        Customer::new("BigCo"),
        vec![
            PerformanceRequest::new("hamlet", 55),
            PerformanceRequest::new("as-like", 35),
            PerformanceRequest::new("othello", 40),
        ],
    )
}

#[test]
fn plain_statement_matches_reference_text() {
    let result = statement(&big_co(), &plays(), OutputKind::Plain, &CurrencyFormat::pt_br()).unwrap();

    let expected = "Statement for BigCo\n\
                    \x20 Hamlet: R$ 650,00 (55 seats)\n\
                    \x20 As You Like It: R$ 580,00 (35 seats)\n\
                    \x20 Othello: R$ 500,00 (40 seats)\n\
                    Amount owed is R$ 1.730,00\n\
                    You earned 47 credits";
    assert_eq!(result, expected);
}

#[test]
fn html_statement_renders_same_data() {
    let result = statement(&big_co(), &plays(), OutputKind::Html, &CurrencyFormat::pt_br()).unwrap();

    let expected = "<h1>Statement for BigCo</h1>\n\
                    <table>\n\
                    <tr><th>play</th><th>seats</th><th>cost</th></tr>\n\
                    \x20 <tr><td>Hamlet</td><td>55</td><td>R$ 650,00</td></tr>\n\
                    \x20 <tr><td>As You Like It</td><td>35</td><td>R$ 580,00</td></tr>\n\
                    \x20 <tr><td>Othello</td><td>40</td><td>R$ 500,00</td></tr>\n\
                    </table>\n\
                    <p>Amount owed is <em>R$ 1.730,00</em></p>\n\
                    <p>You earned <em>47</em> credits</p>\n";
    assert_eq!(result, expected);
}

#[test]
fn one_computation_feeds_both_renderers() {
    let data = create_statement_data(&big_co(), &plays()).unwrap();
    let fmt = CurrencyFormat::en_us();

    let plain = render(&data, OutputKind::Plain, &fmt);
    let html = render(&data, OutputKind::Html, &fmt);
    assert!(plain.contains("Amount owed is $1,730.00"));
    assert!(html.contains("<em>$1,730.00</em>"));
}

#[test]
fn failures_produce_no_output() {
    let mut invoice = big_co();
    invoice.performances.push(PerformanceRequest::new("tempest", 10));
    let err = statement(&invoice, &plays(), OutputKind::Plain, &CurrencyFormat::pt_br()).unwrap_err();
    assert_eq!(err, StatementError::UnknownPlay("tempest".into()));

    let catalog = plays().with_play("henry-v", Play::new("Henry V", "history"));
    let invoice = Invoice::new(
        Customer::new("BigCo"),
        vec![PerformanceRequest::new("henry-v", 10)],
    );
    let err = statement(&invoice, &catalog, OutputKind::Html, &CurrencyFormat::pt_br()).unwrap_err();
    assert_eq!(err, StatementError::UnknownGenre("history".into()));
}
