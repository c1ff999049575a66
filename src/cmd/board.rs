use crate::cache::BoardSnapshotCache;
use crate::context::AppContext;
use crate::domain::board::{GroupingOption, SortOption, build_columns};
use crate::domain::user::UserDirectory;
use crate::error::AppResult;
use crate::ui::board::render_board;
use crate::workflow::board::load_board;

#[derive(Debug, Clone)]
pub struct BoardCommandArgs {
    pub group_by: Option<GroupingOption>,
    pub order_by: Option<SortOption>,
    pub offline: bool,
}

pub async fn run(ctx: &AppContext, args: BoardCommandArgs) -> AppResult<()> {
    let grouping = args.group_by.unwrap_or(ctx.config.default_grouping);
    let ordering = args.order_by.unwrap_or(ctx.config.default_ordering);

    let cache_key = BoardSnapshotCache::compute_key(&ctx.config.source_url);
    let mut cache = BoardSnapshotCache::load()?;

    let load = load_board(ctx, cache.get(&cache_key), args.offline).await?;
    if load.fetched {
        cache.insert(cache_key, &load.payload);
        if let Err(err) = cache.save() {
            eprintln!("Warning: failed to save board snapshot: {err}");
        }
    }

    let directory = UserDirectory::new(&load.payload.users);
    let columns = build_columns(&load.payload.tickets, &directory, grouping, ordering);
    print!("{}", render_board(&columns, &directory, grouping));

    Ok(())
}
