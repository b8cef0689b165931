//! Built-in tuning layers.
//!
//! Layers are applied oldest first and later layers may re-tune keys set by
//! earlier ones (the recovery generation runs much tighter liveness timers).

use crate::hosts::WellKnownPorts;
use crate::tuning::{Profile, TuningTable, TuningValue};
use log::debug;

/// Multicast group shared by every host; the port is the multicast listen port.
pub const MCAST_GROUP_IP: &str = "239.3.0.1";

type Layer = Vec<(&'static str, TuningValue)>;

fn base_layer(ports: &WellKnownPorts) -> Layer {
    vec![
        ("ping_timeout", TuningValue::Integer(300_000)),
        ("host_timeout", TuningValue::Integer(1_200_000)),
        ("ping_interval", TuningValue::Integer(1_000_000)),
        ("ping_window", TuningValue::Integer(100)),
        ("ring_timeout", TuningValue::Integer(2_000_000)),
        ("ring_retry_interval", TuningValue::Integer(3_000_000)),
        ("mcast_group", format!("{}:{}", MCAST_GROUP_IP, ports.mcast_listen).into()),
    ]
}

fn acceptor_layer() -> Layer {
    vec![
        ("ring_broadcast_interval", TuningValue::Integer(500_000)),
        ("acceptor_max_pending_instances", TuningValue::Integer(200_000)),
        ("acceptor_instance_window_size", TuningValue::Integer(1_000_000)),
        ("batch_phase1_timeout", TuningValue::Integer(300_000)),
        ("phase1_batch_size", TuningValue::Integer(1000)),
    ]
}

fn recovery_layer() -> Layer {
    vec![
        // Tighter liveness timers
        ("ping_timeout", TuningValue::Integer(30_000)),
        ("host_timeout", TuningValue::Integer(500_000)),
        ("ping_interval", TuningValue::Integer(200_000)),
        ("ring_timeout", TuningValue::Integer(50_000)),
        ("ring_retry_interval", TuningValue::Integer(500_000)),
        ("send_window", TuningValue::Integer(1_000_000)),
        ("recv_window", TuningValue::Integer(1_000_000)),
        // 10 sec worth of 1 Gbit
        ("instance_pool_open_limit", TuningValue::Integer(160_000)),
        ("instance_pool_reserved_limit", TuningValue::Integer(2000)),
        // Phase 1 is much more expensive than phase 2
        ("phase1_timeout", TuningValue::Integer(100_000)),
        ("phase1_interval", TuningValue::Integer(640)),
        // 15625 * 8000 bytes = 1 Gbit/s
        ("phase2_timeout", TuningValue::Integer(500_000)),
        ("phase2_interval", TuningValue::Integer(64)),
        ("recovery_grace_period", TuningValue::Integer(1_500_000)),
        ("recovery_local_metric", TuningValue::Integer(1)),
        ("recovery_remote_metric", TuningValue::Integer(10)),
        ("recovery_queue_poll_interval", TuningValue::Integer(500_000)),
        ("recovery_reconnect_delay", TuningValue::Integer(1_000_000)),
        ("recovery_socket_timeout", TuningValue::Integer(2_000_000)),
        ("recovery_retry_delay", TuningValue::Integer(750_000)),
        ("commit_flush_interval", TuningValue::Integer(500_000)),
        ("initial_backoff", TuningValue::Integer(10_000)),
        ("max_backoff", TuningValue::Integer(2_000_000)),
        // The engine reads the value port as a string
        ("master_value_port", "30000".into()),
        ("value_buffer_size", TuningValue::Integer(30_000)),
    ]
}

/// Build the tuning table for a profile.
pub fn tuning_table(profile: Profile, ports: &WellKnownPorts) -> TuningTable {
    let mut layers = vec![base_layer(ports)];
    if profile.has_acceptor_tuning() {
        layers.push(acceptor_layer());
    }
    if profile.has_recovery_tuning() {
        layers.push(recovery_layer());
    }

    let mut table = TuningTable::new();
    for (key, value) in layers.into_iter().flatten() {
        table.insert(key.to_string(), value);
    }

    debug!("Tuning table for {} has {} parameters", profile, table.len());
    table
}
