use uuid::Uuid;

pub struct AuditEntry<'a> {
    pub actor_id: Uuid,
    pub actor_name: &'a str,
    pub action: &'a str,
    pub resource: &'a str,
    pub resource_id: Option<Uuid>,
    pub detail: Option<serde_json::Value>,
}

/// Record an audit event. Nothing is stored; events go to the `audit` tracing
/// target so a subscriber can route them separately from operational logs.
pub fn write_audit(entry: &AuditEntry<'_>) {
    let detail = entry
        .detail
        .as_ref()
        .map(serde_json::Value::to_string)
        .unwrap_or_default();

    tracing::info!(
        target: "audit",
        actor_id = %entry.actor_id,
        actor_name = entry.actor_name,
        action = entry.action,
        resource = entry.resource,
        resource_id = ?entry.resource_id,
        detail = %detail,
        "audit"
    );
}
