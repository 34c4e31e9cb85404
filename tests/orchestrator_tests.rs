use payflow::application::orchestrator::PaymentOrchestrator;
use payflow::domain::payment::{Currency, PaymentMethod};
use payflow::domain::transaction::{OrchestrationRequest, PaymentRequest, RefundRequest};
use payflow::infrastructure::in_memory::{
    RecordingAnalytics, RecordingGateway, RecordingNotifier,
};
use payflow::interfaces::csv::request_reader::RequestReader;
use rust_decimal_macros::dec;
use serde_json::json;

fn orchestrator_with_gateway() -> (PaymentOrchestrator, RecordingGateway) {
    let gateway = RecordingGateway::new();
    let orchestrator = PaymentOrchestrator::new(
        Box::new(gateway.clone()),
        Box::new(RecordingNotifier::new()),
        Box::new(RecordingAnalytics::new()),
    );
    (orchestrator, gateway)
}

#[tokio::test]
async fn test_wire_payload_uses_camel_case_contract() {
    let (orchestrator, gateway) = orchestrator_with_gateway();

    orchestrator
        .process_payment(PaymentRequest {
            user_id: "alice".to_string(),
            amount: dec!(100),
            currency: Currency::EUR,
            method: PaymentMethod::CreditCard,
            metadata: json!({"cardNumber": "4111111111111111", "expiry": "12/27"}),
            discount_code: Some("SUMMER20".to_string()),
            fraud_check_level: 2,
        })
        .await
        .unwrap();

    let posts = gateway.posts().await;
    let payload = &posts[0].1;

    assert_eq!(payload["userId"], "alice");
    assert_eq!(payload["originalAmount"], "100");
    assert_eq!(payload["finalAmount"], "96.00");
    assert_eq!(payload["currency"], "EUR");
    assert_eq!(payload["paymentMethod"], "credit_card");
    assert_eq!(payload["discountCode"], "SUMMER20");
    assert_eq!(payload["fraudChecked"], 2);
    assert_eq!(payload["metadata"]["cardNumber"], "4111111111111111");
    assert!(payload["timestamp"].is_string());
}

#[tokio::test]
async fn test_refund_wire_payload() {
    let (orchestrator, gateway) = orchestrator_with_gateway();

    orchestrator
        .refund_payment(RefundRequest {
            transaction_id: "tx-100".to_string(),
            user_id: "alice".to_string(),
            reason: "damaged goods".to_string(),
            amount: dec!(100),
            currency: Currency::USD,
            metadata: json!({}),
        })
        .await
        .unwrap();

    let posts = gateway.posts().await;
    assert_eq!(posts[0].0, "/payments/refund");

    let payload = &posts[0].1;
    assert_eq!(payload["transactionId"], "tx-100");
    assert_eq!(payload["userId"], "alice");
    assert_eq!(payload["amount"], "100");
    assert_eq!(payload["netAmount"], "95.00");
    assert_eq!(payload["reason"], "damaged goods");
    assert!(payload["date"].is_string());
}

#[tokio::test]
async fn test_csv_row_flows_through_the_whole_pipeline() {
    let (orchestrator, gateway) = orchestrator_with_gateway();

    let data = "type, user, amount, currency, method, card_number, expiry, paypal_account, discount_code, fraud_level, transaction_id, reason\n\
        payment, bob, 50, USD, paypal, , , bob@example.com, WELCOME10, , ,";
    let reader = RequestReader::new(data.as_bytes());
    for request in reader.requests() {
        match request.unwrap() {
            OrchestrationRequest::Payment(request) => {
                orchestrator.process_payment(request).await.unwrap();
            }
            OrchestrationRequest::Refund(request) => {
                orchestrator.refund_payment(request).await.unwrap();
            }
        }
    }

    let posts = gateway.posts().await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, "/payments/paypal");
    assert_eq!(posts[0].1["paymentMethod"], "paypal");
    assert_eq!(posts[0].1["finalAmount"], "40");
    assert_eq!(posts[0].1["metadata"]["paypalAccount"], "bob@example.com");
}

#[tokio::test]
async fn test_discount_then_conversion_order() {
    let (orchestrator, gateway) = orchestrator_with_gateway();

    let tx = orchestrator
        .process_payment(PaymentRequest {
            user_id: "carol".to_string(),
            amount: dec!(200),
            currency: Currency::JPY,
            method: PaymentMethod::CreditCard,
            metadata: json!({"cardNumber": "5555555555554444", "expiry": "01/28"}),
            discount_code: Some("WELCOME10".to_string()),
            fraud_check_level: 0,
        })
        .await
        .unwrap();

    // (200 - 10) * 1.2 = 228; conversion-first would give 230.
    assert_eq!(tx.final_amount, dec!(228));
    assert_eq!(gateway.posts().await[0].1["finalAmount"], "228.0");
}

#[tokio::test]
async fn test_amounts_survive_json_round_trip_exactly() {
    let (orchestrator, gateway) = orchestrator_with_gateway();

    let tx = orchestrator
        .process_payment(PaymentRequest {
            user_id: "dave".to_string(),
            amount: dec!(33.33),
            currency: Currency::GBP,
            method: PaymentMethod::Paypal,
            metadata: json!({"paypalAccount": "dave@example.com"}),
            discount_code: None,
            fraud_check_level: 0,
        })
        .await
        .unwrap();

    let posted: payflow::domain::transaction::Transaction =
        serde_json::from_value(gateway.posts().await[0].1.clone()).unwrap();
    assert_eq!(posted, tx);
    assert_eq!(posted.final_amount, dec!(39.996));
}
