use crate::core::{BurnAccountMetas, ClassifiedAsset};

/// Concatenate classified assets into the two remaining-account lists.
///
/// Input order is kept and nothing is deduplicated.
pub fn build_account_metas(classified: &[ClassifiedAsset]) -> BurnAccountMetas {
    classified
        .iter()
        .fold(BurnAccountMetas::default(), |mut metas, asset| {
            match asset {
                ClassifiedAsset::Nft { .. } => metas.nfts.extend(asset.account_metas()),
                ClassifiedAsset::Token { .. } => metas.tokens.extend(asset.account_metas()),
            }
            metas
        })
}
