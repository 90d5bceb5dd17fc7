//! Seed roster and alias table.
//!
//! Both tables are immutable configuration data. The roster mirrors the
//! rows seeded into the store's `teams` table; the alias table maps the
//! short forms the upstream search source actually returns ("Yomiuri",
//! "DeNA", "Lotte", ...) onto canonical English names.

use crate::types::{League, Team};

/// The full 12-team roster: (localized name, English name, league).
const SEED_ROSTER: &[(&str, &str, League)] = &[
    // Central League
    ("読売ジャイアンツ", "Yomiuri Giants", League::Central),
    ("阪神タイガース", "Hanshin Tigers", League::Central),
    ("中日ドラゴンズ", "Chunichi Dragons", League::Central),
    ("東京ヤクルトスワローズ", "Tokyo Yakult Swallows", League::Central),
    ("広島東洋カープ", "Hiroshima Toyo Carp", League::Central),
    ("横浜DeNAベイスターズ", "Yokohama DeNA BayStars", League::Central),
    // Pacific League
    ("福岡ソフトバンクホークス", "Fukuoka SoftBank Hawks", League::Pacific),
    ("千葉ロッテマリーンズ", "Chiba Lotte Marines", League::Pacific),
    ("東北楽天ゴールデンイーグルス", "Tohoku Rakuten Golden Eagles", League::Pacific),
    ("埼玉西武ライオンズ", "Saitama Seibu Lions", League::Pacific),
    ("北海道日本ハムファイターズ", "Hokkaido Nippon-Ham Fighters", League::Pacific),
    ("オリックス・バファローズ", "Orix Buffaloes", League::Pacific),
];

/// Upstream short form -> canonical English name. Small and intentional:
/// entries are added only when observed in real responses.
pub(crate) const NAME_ALIASES: &[(&str, &str)] = &[
    // Central League
    ("Yomiuri", "Yomiuri Giants"),
    ("Giants", "Yomiuri Giants"),
    ("Hanshin", "Hanshin Tigers"),
    ("Tigers", "Hanshin Tigers"),
    ("Chunichi", "Chunichi Dragons"),
    ("Dragons", "Chunichi Dragons"),
    ("Yakult", "Tokyo Yakult Swallows"),
    ("Swallows", "Tokyo Yakult Swallows"),
    ("Hiroshima", "Hiroshima Toyo Carp"),
    ("Carp", "Hiroshima Toyo Carp"),
    ("DeNA", "Yokohama DeNA BayStars"),
    ("BayStars", "Yokohama DeNA BayStars"),
    // Pacific League
    ("SoftBank", "Fukuoka SoftBank Hawks"),
    ("Hawks", "Fukuoka SoftBank Hawks"),
    ("Lotte", "Chiba Lotte Marines"),
    ("Marines", "Chiba Lotte Marines"),
    ("Rakuten", "Tohoku Rakuten Golden Eagles"),
    ("Eagles", "Tohoku Rakuten Golden Eagles"),
    ("Seibu", "Saitama Seibu Lions"),
    ("Lions", "Saitama Seibu Lions"),
    ("Nippon-Ham", "Hokkaido Nippon-Ham Fighters"),
    ("Fighters", "Hokkaido Nippon-Ham Fighters"),
    ("Orix", "Orix Buffaloes"),
    ("Buffaloes", "Orix Buffaloes"),
];

/// Build the seed roster. Used by the store migration tooling and by
/// tests; production runs read the same rows back from the store.
pub fn seed_teams() -> Vec<Team> {
    SEED_ROSTER
        .iter()
        .map(|(name, name_en, league)| Team::new(*name, *name_en, *league))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamId;

    #[test]
    fn roster_has_six_teams_per_league() {
        let teams = seed_teams();
        assert_eq!(teams.len(), 12);
        assert_eq!(teams.iter().filter(|t| t.league == League::Central).count(), 6);
        assert_eq!(teams.iter().filter(|t| t.league == League::Pacific).count(), 6);
    }

    #[test]
    fn roster_ids_are_slugs_of_english_names() {
        let teams = seed_teams();
        let giants = teams.iter().find(|t| t.name_en == "Yomiuri Giants").unwrap();
        assert_eq!(giants.id, TeamId::new("yomiuri-giants"));
        let fighters = teams.iter().find(|t| t.name_en == "Hokkaido Nippon-Ham Fighters").unwrap();
        assert_eq!(fighters.id, TeamId::new("hokkaido-nippon-ham-fighters"));
    }

    #[test]
    fn aliases_all_point_at_roster_names() {
        let teams = seed_teams();
        for (alias, canonical) in NAME_ALIASES {
            assert!(
                teams.iter().any(|t| t.name_en == *canonical),
                "alias {alias:?} targets unknown name {canonical:?}"
            );
        }
    }
}
