pub use crate::agent::{Agent, Condition};
pub use crate::error::MeetupError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::meetup::{meet, meetup};
