use anyhow::{Context, Result};
use clap::Args;
use usersearch_client::SearchClient;
use usersearch_types::{SearchRequest, MAX_LIMIT, ORDER_BY_AS_IS};

use crate::{config::OutputFormat, output};

#[derive(Args, Clone)]
pub struct SearchCommand {
    /// Free text matched by the server
    #[arg(short, long, default_value = "")]
    query: String,

    /// Rows per page, capped at 25
    #[arg(short, long, default_value_t = MAX_LIMIT, allow_negative_numbers = true)]
    limit: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Field to sort by (server default when empty)
    #[arg(long, default_value = "")]
    order_field: String,

    /// -1 ascending, 0 as is, 1 descending
    #[arg(long, default_value_t = ORDER_BY_AS_IS, allow_negative_numbers = true)]
    order_by: i64,

    /// Follow pages until the server has no more rows
    #[arg(long)]
    all: bool,
}

impl SearchCommand {
    fn request(&self) -> SearchRequest {
        SearchRequest::new()
            .with_limit(self.limit)
            .with_offset(self.offset)
            .with_query(self.query.as_str())
            .with_order_field(self.order_field.as_str())
            .with_order_by(self.order_by)
    }

    pub async fn execute(self, client: &SearchClient, output_format: &OutputFormat) -> Result<()> {
        let req = self.request();
        if self.all {
            let users = client
                .find_all_users(&req)
                .await
                .context("Fail fetch all users")?;
            output::print_users(users, None, output_format)
        } else {
            let page = client.find_users(&req).await.context("Fail search users")?;
            output::print_users(page.users, Some(page.next_page), output_format)
        }
    }
}
