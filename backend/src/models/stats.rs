use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_medications: i64,
    pub taken_today: i64,
    pub adherence_rate: i64,
    /// Always 0: streak tracking is not implemented yet.
    pub streak: i64,
}
