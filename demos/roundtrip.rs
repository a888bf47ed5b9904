use urlchemy::Config;

fn main() {
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "?user.id=1&user[name]=John%20Doe&tags=a&tags=b&draft".to_string());
    println!("input:     {query}");

    let record = urlchemy::decode(&query);
    println!("decoded:   {record:?}");

    let configs = [
        ("brackets", Config::default()),
        ("raw", Config::new().encode(false)),
        ("dots", Config::new().strict(true).encode(false)),
        ("sorted", Config::new().sort(true).prefix(true).exclude_nulls(true)),
    ];
    for (name, config) in configs {
        println!("{name:<10} {}", urlchemy::encode(&record, config));
    }

    match urlchemy::decode_strict(&query) {
        Ok(_) => println!("strict:    ok"),
        Err(err) => println!("strict:    {err}"),
    }
}
