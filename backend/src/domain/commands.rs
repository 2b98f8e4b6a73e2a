//! Domain-level command and result types.
//! These are used by services inside the domain layer and are **not** exposed
//! over the public API. The REST layer maps the DTOs from the `shared` crate
//! to and from these types.

pub mod config {
    use shared::AppConfig;

    /// Input for replacing the kiosk configuration.
    #[derive(Debug, Clone)]
    pub struct UpdateConfigCommand {
        pub config: AppConfig,
    }

    /// Result of replacing the kiosk configuration.
    #[derive(Debug, Clone)]
    pub struct UpdateConfigResult {
        pub config: AppConfig,
        pub success_message: String,
    }
}

pub mod chores {
    use shared::Task;

    /// Input for handing a chore to a kid by hand.
    #[derive(Debug, Clone)]
    pub struct ReassignTaskCommand {
        pub task_id: String,
        /// `None` clears the assignment
        pub kid_id: Option<String>,
    }

    /// Result of a manual reassignment.
    #[derive(Debug, Clone)]
    pub struct ReassignTaskResult {
        pub task: Task,
        pub success_message: String,
    }
}
