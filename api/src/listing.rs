//! Marketplace listing queries over the `nfts` table.

use sea_orm::{
    prelude::*,
    sea_query::{Expr, Func, LikeExpr},
    Condition, QueryOrder, QuerySelect,
};

use crate::{
    entities::{nfts, prelude::Nfts},
    error::ApiError,
};

/// Number of NFTs returned per listing page.
pub const PAGE_SIZE: u64 = 8;

/// Offsets are bound as signed 64-bit integers by the store drivers.
const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

const LIKE_ESCAPE: char = '!';

/// Optional attribute filters for the marketplace listing.
///
/// A filter that is absent or empty places no constraint on the listing. Supplied values are compared
/// case-insensitively and must match the stored attribute exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftFilter {
    pub collections: Option<String>,
    pub team: Option<String>,
    pub athlete: Option<String>,
    pub musician: Option<String>,
    pub artist: Option<String>,
    pub network: Option<String>,
    pub nft_status: Option<String>,
}

impl NftFilter {
    /// The non-empty filters paired with the column they constrain, values lower-cased.
    #[must_use]
    pub fn predicates(&self) -> Vec<(nfts::Column, String)> {
        [
            (nfts::Column::Collections, &self.collections),
            (nfts::Column::Teams, &self.team),
            (nfts::Column::Athlete, &self.athlete),
            (nfts::Column::Musician, &self.musician),
            (nfts::Column::Artist, &self.artist),
            (nfts::Column::Network, &self.network),
            (nfts::Column::NftStatus, &self.nft_status),
        ]
        .into_iter()
        .filter_map(|(column, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (column, v.to_lowercase()))
        })
        .collect()
    }

    fn condition(&self) -> Condition {
        self.predicates()
            .into_iter()
            .fold(Condition::all(), |condition, (column, value)| {
                condition.add(Expr::expr(Func::lower(Expr::col(column))).eq(value))
            })
    }
}

/// Loads one page of NFTs matching `filter`, most recently updated first.
///
/// `page` is zero based. Ties on `updated_at` are broken by id so consecutive pages never overlap. A page
/// past the end of the listing is empty, however large.
///
/// # Errors
/// This function fails if the store query fails
pub async fn filter_nfts<C: ConnectionTrait>(
    conn: &C,
    filter: &NftFilter,
    page: u64,
) -> Result<Vec<nfts::Model>, ApiError> {
    let nfts = Nfts::find()
        .filter(filter.condition())
        .order_by_desc(nfts::Column::UpdatedAt)
        .order_by_desc(nfts::Column::Id)
        .offset(page_offset(page))
        .limit(PAGE_SIZE)
        .all(conn)
        .await?;

    Ok(nfts)
}

fn page_offset(page: u64) -> u64 {
    page.saturating_mul(PAGE_SIZE).min(MAX_OFFSET)
}

/// Auction NFTs currently offered on the marketplace, most recently updated first.
///
/// # Errors
/// This function fails if the store query fails
pub async fn auction_listing<C: ConnectionTrait>(conn: &C) -> Result<Vec<nfts::Model>, ApiError> {
    let nfts = Nfts::find()
        .filter(nfts::Column::IsAuction.eq(true))
        .filter(nfts::Column::IsMarketPlace.eq(true))
        .order_by_desc(nfts::Column::UpdatedAt)
        .all(conn)
        .await?;

    Ok(nfts)
}

/// NFTs whose name contains `key`, ignoring case. `%` and `_` in `key` match literally.
///
/// # Errors
/// This function fails if the store query fails
pub async fn search_nfts<C: ConnectionTrait>(
    conn: &C,
    key: &str,
) -> Result<Vec<nfts::Model>, ApiError> {
    let pattern = LikeExpr::str(contains_pattern(key)).escape(LIKE_ESCAPE);

    let nfts = Nfts::find()
        .filter(Expr::expr(Func::lower(Expr::col(nfts::Column::Name))).like(pattern))
        .all(conn)
        .await?;

    Ok(nfts)
}

fn contains_pattern(key: &str) -> String {
    let mut pattern = String::with_capacity(key.len() + 2);
    pattern.push('%');

    for c in key.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }

        pattern.push(c);
    }

    pattern.push('%');
    pattern
}
