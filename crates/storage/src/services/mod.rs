pub mod record_query;
