use gstbill::application::engine::InvoiceEngine;
use gstbill::domain::invoice::InvoiceState;
use gstbill::domain::line_item::RowInput;
use gstbill::domain::ports::InvoiceSinkBox;
use gstbill::domain::rounding::RoundingPolicy;
use gstbill::domain::words::{IndianNumbering, InternationalNumbering, NumberingSystemBox};
use gstbill::infrastructure::in_memory::InMemoryInvoiceSink;
use gstbill::infrastructure::text_file::TextFileSink;
use gstbill::interfaces::report::InvoiceReport;

fn state() -> InvoiceState {
    InvoiceState::with_rows(vec![RowInput::new("Sweater", "1000", "1000")])
}

#[tokio::test]
async fn test_engine_with_boxed_numbering_across_tasks() {
    let systems: Vec<NumberingSystemBox> =
        vec![Box::new(IndianNumbering), Box::new(InternationalNumbering)];

    let mut handles = Vec::new();
    for system in systems {
        let engine = InvoiceEngine::new(system, RoundingPolicy::default());
        handles.push(tokio::spawn(async move {
            engine.recalculate(&state()).unwrap().words
        }));
    }

    let mut words = Vec::new();
    for handle in handles {
        words.push(handle.await.unwrap());
    }

    assert_eq!(
        words,
        vec![
            "Ten Lakh Fifty Thousand Only".to_string(),
            "One Million Fifty Thousand Only".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_report_saved_through_any_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.txt");
    let memory = InMemoryInvoiceSink::new();

    let sinks: Vec<InvoiceSinkBox> = vec![
        Box::new(memory.clone()),
        Box::new(TextFileSink::new(&path)),
    ];

    let state = state();
    let engine = InvoiceEngine::default();
    let summary = engine.recalculate(&state).unwrap();
    let document = InvoiceReport::new(state.header(), &summary, engine.rounding()).render();

    for sink in &sinks {
        sink.save(&document).await.unwrap();
    }

    assert_eq!(memory.documents().await, vec![document.clone()]);
    assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), document);
}
