pub mod alerts;
pub mod predictions;
pub mod routes;
pub mod schedules;
pub mod stops;
pub mod vehicles;

// Re-export all APIs
pub use alerts::{AlertsApi, AlertsQuery};
pub use predictions::{PredictionsApi, PredictionsQuery};
pub use routes::{RoutesApi, RoutesQuery};
pub use schedules::{SchedulesApi, SchedulesQuery};
pub use stops::{StopsApi, StopsQuery};
pub use vehicles::{VehiclesApi, VehiclesQuery};
