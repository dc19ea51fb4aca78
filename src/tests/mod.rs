mod properties;

use crate::njd::NjdFeature;

pub(super) fn feat(string: &str, pron: &str, acc: i64, chain_flag: i64) -> NjdFeature {
    NjdFeature {
        string: string.to_string(),
        pron: pron.to_string(),
        acc,
        chain_flag,
        ..NjdFeature::default()
    }
}
