//! Startup flow: parse configuration, select the policy, drive it through
//! the trait object the transport layer owns.

use opengate_engine::select_policy;
use opengate_frame::CanFrame;
use opengate_policy::{GateConfig, SafetyPolicy};

fn cruise_frame(engaged: bool) -> CanFrame {
    let mut payload = [0u8; 8];
    if engaged {
        payload[6] = 0x10;
    }
    CanFrame::new(0x1D2, 0, &payload)
}

fn steer_frame(torque: i16) -> CanFrame {
    let raw = torque as u16;
    let mut payload = [0u8; 8];
    payload[1] = (raw >> 8) as u8;
    payload[2] = (raw & 0xFF) as u8;
    CanFrame::new(0x2E4, 0, &payload)
}

#[track_caller]
fn must<T, E: std::fmt::Debug>(r: Result<T, E>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("unexpected Err: {e:?}"),
    }
}

#[test]
fn test_configured_torque_gate_end_to_end() {
    let config: GateConfig =
        must(serde_json::from_str(r#"{"policy":"torque_gate","torque_factor":100}"#));
    let mut policy = must(select_policy(&config));

    // Fail closed until cruise engages.
    assert!(!policy.tx(&steer_frame(5)));
    assert!(policy.tx(&steer_frame(0)));

    policy.rx(&cruise_frame(true));
    assert!(policy.tx(&steer_frame(2)));

    policy.rx(&cruise_frame(false));
    assert!(!policy.tx(&steer_frame(2)));
}

#[test]
fn test_unconfigured_gate_boots_silent() {
    let config: GateConfig = must(serde_json::from_str("{}"));
    let mut policy = must(select_policy(&config));

    // Everything is blocked, engaged or not.
    policy.rx(&cruise_frame(true));
    assert!(!policy.tx(&steer_frame(0)));
    assert!(!policy.tx(&CanFrame::new(0x123, 1, &[])));
}
