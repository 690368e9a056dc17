mod helpers;

use helpers::upstream_reply;
use hickory_proto::op::{MessageType, ResponseCode as WireResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::RData;
use split_horizon_application::ports::QueryContext;
use split_horizon_application::services::SplitHorizonModule;
use split_horizon_domain::{
    ExtState, ModuleEvent, ModuleId, ModuleState, NetworkPair, ResponseCode, SecurityStatus,
    ViewTable,
};
use split_horizon_infrastructure::dns::{MessageBuilder, MessageQueryContext};
use std::net::Ipv4Addr;
use std::sync::Arc;

const ID: ModuleId = ModuleId(0);

fn module() -> SplitHorizonModule {
    let pair = NetworkPair::parse("eth0", "203.0.113.0/30", "10.0.0.0/30").unwrap();
    let mut builder = ViewTable::builder();
    builder.activate(&pair);
    SplitHorizonModule::with_view_table(ID, Arc::new(builder.build()), 3600)
}

#[test]
fn test_context_starts_without_response() {
    let ctx = MessageQueryContext::for_name("svc.example.").unwrap();

    assert_eq!(ctx.qname(), "svc.example.");
    assert!(!ctx.has_response());
    assert!(ctx.answer_rrsets().is_none());
}

#[test]
fn test_mapped_answer_is_replaced_with_internal_address() {
    let module = module();
    let mut ctx = MessageQueryContext::for_name("svc.example.").unwrap();

    assert_eq!(
        module.operate(ID, ModuleEvent::New, &mut ctx),
        ModuleState::AwaitingResolution
    );
    ctx.set_response(upstream_reply(
        "svc.example.",
        &[Ipv4Addr::new(203, 0, 113, 2)],
    ));
    assert_eq!(
        module.operate(ID, ModuleEvent::ModDone, &mut ctx),
        ModuleState::Finished
    );

    assert_eq!(ctx.ext_state(ID), Some(ExtState::Finished));
    assert_eq!(ctx.security(), SecurityStatus::Indeterminate);
    assert_eq!(ctx.return_rcode(), Some(ResponseCode::NoError));

    let response = ctx.response().unwrap();
    assert_eq!(response.id(), 4242);
    assert_eq!(response.message_type(), MessageType::Response);
    assert!(response.authoritative());
    assert!(response.recursion_available());
    assert_eq!(response.response_code(), WireResponseCode::NoError);
    assert_eq!(response.queries().len(), 1);
    assert_eq!(response.answers().len(), 1);
    assert_eq!(response.answers()[0].name().to_utf8(), "svc.example.");
    assert_eq!(
        response.answers()[0].data(),
        &RData::A(A(Ipv4Addr::new(10, 0, 0, 2)))
    );
}

#[test]
fn test_unmapped_answer_is_left_untouched() {
    let module = module();
    let mut ctx = MessageQueryContext::for_name("svc.example.").unwrap();
    let upstream = upstream_reply("svc.example.", &[Ipv4Addr::new(198, 51, 100, 5)]);
    let original_answers = upstream.answers().to_vec();

    ctx.set_response(upstream);
    let state = module.operate(ID, ModuleEvent::ModDone, &mut ctx);

    assert_eq!(state, ModuleState::Finished);
    assert_eq!(ctx.security(), SecurityStatus::Unchecked);
    assert!(ctx.return_rcode().is_none());

    let response = ctx.response().unwrap();
    assert!(!response.authoritative());
    assert_eq!(response.answers(), original_answers.as_slice());
}

#[test]
fn test_rejected_install_errors_the_query() {
    let module = module();
    let mut ctx = MessageQueryContext::for_name("svc.example.")
        .unwrap()
        .rejecting_install();
    ctx.set_response(upstream_reply(
        "svc.example.",
        &[Ipv4Addr::new(203, 0, 113, 1)],
    ));

    let state = module.operate(ID, ModuleEvent::ModDone, &mut ctx);

    assert_eq!(state, ModuleState::Errored);
    assert_eq!(ctx.ext_state(ID), Some(ExtState::Error));
    assert!(!ctx.response().unwrap().authoritative());
}

#[test]
fn test_wire_round_trip_response_is_rewritten() {
    let module = module();
    let mut ctx = MessageQueryContext::for_name("svc.example.").unwrap();
    let bytes = upstream_reply(
        "svc.example.",
        &[Ipv4Addr::new(198, 51, 100, 5), Ipv4Addr::new(203, 0, 113, 3)],
    )
    .to_vec()
    .unwrap();

    ctx.set_response(MessageBuilder::parse(&bytes).unwrap());
    module.operate(ID, ModuleEvent::ModDone, &mut ctx);

    let answers = ctx.into_response().unwrap().answers().to_vec();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].data(), &RData::A(A(Ipv4Addr::new(10, 0, 0, 3))));
}
