use super::filter_hosts;

fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn matches_case_insensitive_substrings_in_order() {
    let aliases = hosts(&["alpha", "beta", "gamma"]);
    assert_eq!(filter_hosts(&aliases, "a"), aliases);
    assert_eq!(filter_hosts(&aliases, "GA"), hosts(&["gamma"]));
    assert!(filter_hosts(&aliases, "zeta").is_empty());
}

#[test]
fn empty_query_keeps_everything() {
    let aliases = hosts(&["Web01", "db-primary"]);
    assert_eq!(filter_hosts(&aliases, ""), aliases);
}

#[test]
fn longer_query_only_narrows() {
    let aliases = hosts(&["prod-web", "prod-db", "stage-web", "dev"]);
    let broad = filter_hosts(&aliases, "prod");
    let narrow = filter_hosts(&aliases, "prod-w");
    assert!(narrow.iter().all(|host| broad.contains(host)));
    assert_eq!(narrow, hosts(&["prod-web"]));
}

#[test]
fn filtering_is_idempotent() {
    let aliases = hosts(&["prod-web", "prod-db", "stage-web"]);
    let once = filter_hosts(&aliases, "web");
    assert_eq!(filter_hosts(&once, "web"), once);
}
