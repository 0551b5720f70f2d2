//! Per-page interaction state.
//!
//! Each value here is owned by the page being rendered and rebuilt from
//! the request on every render. None of it is global.
//!
//! | State             | Page        | Events                     |
//! |-------------------|-------------|----------------------------|
//! | `Pagination`      | `/blog/`    | load more                  |
//! | `ProjectFilter`   | `/projects/`| pick technology, type text |
//! | `DetailSelection` | `/`         | view details, close        |

pub mod detail;
pub mod filter;
pub mod pagination;

pub use detail::DetailSelection;
pub use filter::{ProjectFilter, TechFilter};
pub use pagination::Pagination;
