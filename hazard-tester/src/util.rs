use anyhow::{Context, Result};

use crate::logic::GameplayStrategy;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse `--seeds`; accepts decimal or `0x`-prefixed hex.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    let seeds = split_csv(s)
        .iter()
        .map(|token| {
            let parsed = match token.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => token.parse::<u64>(),
            };
            parsed.with_context(|| format!("invalid seed `{token}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    anyhow::ensure!(!seeds.is_empty(), "at least one seed is required");
    Ok(seeds)
}

/// Parse `--policies`; `all` expands to every built-in strategy.
pub fn parse_policies(s: &str) -> Result<Vec<GameplayStrategy>> {
    let mut strategies = Vec::new();
    for token in split_csv(s) {
        if token.eq_ignore_ascii_case("all") {
            for strategy in GameplayStrategy::ALL {
                if !strategies.contains(&strategy) {
                    strategies.push(strategy);
                }
            }
            continue;
        }
        let strategy: GameplayStrategy = token.parse()?;
        if !strategies.contains(&strategy) {
            strategies.push(strategy);
        }
    }
    Ok(strategies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_drops_blanks() {
        assert_eq!(split_csv(" a, ,b ,"), vec!["a", "b"]);
    }

    #[test]
    fn seeds_accept_hex_and_decimal() {
        assert_eq!(parse_seeds("1337, 0xff").unwrap(), vec![1337, 255]);
        assert!(parse_seeds("seven").is_err());
        assert!(parse_seeds(" , ").is_err());
    }

    #[test]
    fn policies_expand_all_without_duplicates() {
        let all = parse_policies("oracle,all").unwrap();
        assert_eq!(all.len(), GameplayStrategy::ALL.len());
        assert_eq!(all[0], GameplayStrategy::Oracle);
        assert_eq!(
            parse_policies("last").unwrap(),
            vec![GameplayStrategy::LastOption]
        );
        assert!(parse_policies("greedy").is_err());
    }
}
