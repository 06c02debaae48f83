pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Split a `LOW,HIGH` pair.
pub fn split_pair(s: &str) -> Option<(String, String)> {
    match split_csv(s).as_slice() {
        [low, high] => Some((low.clone(), high.clone())),
        _ => None,
    }
}
