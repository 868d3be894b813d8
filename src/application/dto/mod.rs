/// Data Transfer Objects for the application layer
mod count_request;
mod count_response;
mod output_format;
mod sort_order;

pub use count_request::CountRequest;
pub use count_response::CountResponse;
pub use output_format::OutputFormat;
pub use sort_order::SortOrder;
