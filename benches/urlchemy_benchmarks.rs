use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use urlchemy::{Config, Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SimpleStruct {
    id: u32,
    name: String,
    active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SimpleVecWrapper {
    items: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Address {
    city: String,
    street: String,
    postcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QueryParams {
    id: u8,
    name: String,
    phone: u32,
    address: Address,
    user_ids: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeepNested {
    level1: Level1,
    metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Level1 {
    level2: Level2,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Level2 {
    level3: Level3,
    config: HashMap<String, i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Level3 {
    value: String,
    flags: Vec<bool>,
}

fn nested_params() -> QueryParams {
    QueryParams {
        id: 42,
        name: "Acme Corporation".to_string(),
        phone: 5551234,
        address: Address {
            city: "Carrot City".to_string(),
            street: "123 Main St".to_string(),
            postcode: "12345".to_string(),
        },
        user_ids: vec![1, 2, 3, 4, 5],
    }
}

fn deep_nested() -> DeepNested {
    let mut config = HashMap::new();
    config.insert("max_retry".to_string(), 3);
    config.insert("timeout".to_string(), 30);

    let mut metadata = HashMap::new();
    metadata.insert("version".to_string(), "1.0".to_string());
    metadata.insert("author".to_string(), "test".to_string());

    DeepNested {
        level1: Level1 {
            level2: Level2 {
                level3: Level3 {
                    value: "deep_value".to_string(),
                    flags: vec![true, false, true],
                },
                config,
            },
            tags: vec!["tag1".to_string(), "tag2".to_string(), "tag3".to_string()],
        },
        metadata,
    }
}

fn value_record() -> Map {
    let mut user = Map::new();
    user.insert("id".into(), Value::from(1));
    user.insert("name".into(), "John Doe".into());
    user.insert("roles".into(), Value::from(vec!["admin", "dev"]));

    let mut params = Map::new();
    params.insert("user".into(), Value::Record(user));
    params.insert("q".into(), "hello world & more".into());
    params.insert("page".into(), Value::from(3));
    params.insert("draft".into(), Value::Null);
    params
}

fn encode_value_record(c: &mut Criterion) {
    let params = value_record();

    c.bench_function("encode_value_record", |b| {
        b.iter(|| urlchemy::encode(black_box(&params), Config::default()))
    });
}

fn encode_value_record_strict_sorted(c: &mut Criterion) {
    let params = value_record();
    let config = Config::new().strict(true).sort(true).prefix(true);

    c.bench_function("encode_value_record_strict_sorted", |b| {
        b.iter(|| urlchemy::encode(black_box(&params), config))
    });
}

fn encode_value_record_raw(c: &mut Criterion) {
    let params = value_record();
    let config = Config::new().encode(false).exclude_nulls(true);

    c.bench_function("encode_value_record_raw", |b| {
        b.iter(|| urlchemy::encode(black_box(&params), config))
    });
}

fn decode_flat(c: &mut Criterion) {
    let query = "key1=value1&key2=value2&key3=value3";

    c.bench_function("decode_flat", |b| b.iter(|| urlchemy::decode(black_box(query))));
}

fn decode_brackets(c: &mut Criterion) {
    let query = "user%5Bid%5D=1&user%5Bname%5D=John%20Doe&user%5Broles%5D=admin&user%5Broles%5D=dev&q=hello";

    c.bench_function("decode_brackets", |b| {
        b.iter(|| urlchemy::decode(black_box(query)))
    });
}

fn decode_dots(c: &mut Criterion) {
    let query = "user.id=1&user.name=John%20Doe&user.roles=admin&user.roles=dev&q=hello";

    c.bench_function("decode_dots", |b| b.iter(|| urlchemy::decode(black_box(query))));
}

fn serialize_simple_struct(c: &mut Criterion) {
    let data = SimpleStruct {
        id: 42,
        name: "test_user".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| urlchemy::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_nested_struct(c: &mut Criterion) {
    let data = nested_params();

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| urlchemy::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_deep_nested(c: &mut Criterion) {
    let data = deep_nested();

    c.bench_function("serialize_deep_nested", |b| {
        b.iter(|| urlchemy::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_large_vec(c: &mut Criterion) {
    let data = SimpleVecWrapper {
        items: (0..1000).collect(),
    };

    c.bench_function("serialize_large_vec", |b| {
        b.iter(|| urlchemy::to_string(black_box(&data)).unwrap())
    });
}

fn deserialize_simple_struct(c: &mut Criterion) {
    let query = "id=42&name=test_user&active=true";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| {
            let _: SimpleStruct = urlchemy::from_str(black_box(query)).unwrap();
        })
    });
}

fn deserialize_nested_struct(c: &mut Criterion) {
    let query = "id=42&name=Acme%20Corporation&phone=5551234&address[city]=Carrot%20City&address[street]=123%20Main%20St&address[postcode]=12345&user_ids=1&user_ids=2&user_ids=3&user_ids=4&user_ids=5";

    c.bench_function("deserialize_nested_struct", |b| {
        b.iter(|| {
            let _: QueryParams = urlchemy::from_str(black_box(query)).unwrap();
        })
    });
}

fn deserialize_deep_nested(c: &mut Criterion) {
    let query = "level1.level2.level3.value=deep_value&level1.level2.level3.flags=true&level1.level2.level3.flags=false&level1.level2.level3.flags=true&level1.level2.config.max_retry=3&level1.level2.config.timeout=30&level1.tags=tag1&level1.tags=tag2&level1.tags=tag3&metadata.version=1.0&metadata.author=test";

    c.bench_function("deserialize_deep_nested", |b| {
        b.iter(|| {
            let _: DeepNested = urlchemy::from_str(black_box(query)).unwrap();
        })
    });
}

fn deserialize_large_vec(c: &mut Criterion) {
    let query = (0..1000)
        .map(|i| format!("items={i}"))
        .collect::<Vec<_>>()
        .join("&");

    c.bench_function("deserialize_large_vec", |b| {
        b.iter(|| {
            let _: SimpleVecWrapper = urlchemy::from_str(black_box(&query)).unwrap();
        })
    });
}

criterion_group!(
    values,
    encode_value_record,
    encode_value_record_strict_sorted,
    encode_value_record_raw,
    decode_flat,
    decode_brackets,
    decode_dots
);

criterion_group!(
    serialize,
    serialize_simple_struct,
    serialize_nested_struct,
    serialize_deep_nested,
    serialize_large_vec
);

criterion_group!(
    deserialize,
    deserialize_simple_struct,
    deserialize_nested_struct,
    deserialize_deep_nested,
    deserialize_large_vec
);

criterion_main!(values, serialize, deserialize);
