//! Integration tests for the generator-facing surface.
//!
//! These tests walk a table through the same steps a code generator
//! takes: naming the model, quoting the table, building the query text
//! and rendering struct tags.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

use strmangle::prelude::*;
use strmangle::sql::{parse_enum, schema_table, where_clause_repeated};

struct Table {
    schema: &'static str,
    name: &'static str,
    columns: Vec<&'static str>,
}

fn accounts() -> Table {
    Table {
        schema: "public",
        name: "user_accounts",
        columns: vec!["id", "owner_uuid", "display_name", "type"],
    }
}

/// Test naming the model and its fields
#[test]
fn test_model_naming() {
    let table = accounts();
    let conv = CaseConverter::default();

    let fields: Vec<String> = table.columns.iter().map(|c| conv.title_case(c)).collect();
    assert_eq!(fields, ["ID", "OwnerUUID", "DisplayName", "Type"]);

    let locals: Vec<String> = table
        .columns
        .iter()
        .map(|c| replace_reserved_words(&conv.camel_case(c)))
        .collect();
    assert_eq!(locals, ["id", "ownerUUID", "displayName", "type_"]);

    assert_eq!(conv.title_case(table.name), "UserAccounts");
    assert_eq!(
        conv.title_case_identifier(&format!("{}.{}", table.schema, table.name)),
        "Public.UserAccounts"
    );
}

/// Test building insert/update/select text for PostgreSQL
#[test]
fn test_postgres_query_text() {
    let table = accounts();
    let dialect = Dialect::PostgreSql;
    let (lq, rq) = dialect.quotes();
    let (lqs, rqs) = (lq.to_string(), rq.to_string());

    let from = schema_table(&lqs, &rqs, true, table.schema, table.name);
    let cols = quote_slice(lq, rq, &table.columns).join(",");
    let values = placeholders(dialect.uses_indexed_placeholders(), 8, 1, 4).unwrap();

    insta::assert_snapshot!(
        format!("INSERT INTO {from} ({cols}) VALUES {values}"),
        @r#"INSERT INTO "public"."user_accounts" ("id","owner_uuid","display_name","type") VALUES ($1,$2,$3,$4),($5,$6,$7,$8)"#
    );

    let update = format!(
        "UPDATE {from} SET {} WHERE {}",
        set_param_names(&lqs, &rqs, 1, &table.columns[1..]),
        where_clause(&lqs, &rqs, 4, &table.columns[..1]),
    );
    insta::assert_snapshot!(
        update,
        @r#"UPDATE "public"."user_accounts" SET "owner_uuid"=$1,"display_name"=$2,"type"=$3 WHERE "id"=$4"#
    );

    insta::assert_snapshot!(
        where_in_clause(&lqs, &rqs, 1, &["id", "owner_uuid"], 3),
        @r#""id" IN ($1,$2,$3) AND "owner_uuid" IN ($4,$5,$6)"#
    );

    insta::assert_snapshot!(
        where_clause_repeated(&lqs, &rqs, 1, &["id", "owner_uuid"], 2),
        @r#"("id"=$1 AND "owner_uuid"=$2) OR ("id"=$3 AND "owner_uuid"=$4)"#
    );
}

/// Test building the same text for MySQL
#[test]
fn test_mysql_query_text() {
    let table = accounts();
    let dialect = Dialect::MySql;
    let (lq, rq) = dialect.quotes();
    let (lqs, rqs) = (lq.to_string(), rq.to_string());

    let from = schema_table(&lqs, &rqs, false, table.schema, table.name);
    let values = placeholders(dialect.uses_indexed_placeholders(), 4, 1, 1).unwrap();
    assert_eq!(from, "`user_accounts`");
    assert_eq!(values, "?,?,?,?");
    assert_eq!(
        where_clause(&lqs, &rqs, 0, &["id", "type"]),
        "`id`=? AND `type`=?"
    );
    assert_eq!(quote_character(lq), "`");
    assert_eq!(quote_character(Dialect::PostgreSql.quotes().0), r#"\""#);
}

/// Test pairing columns with their Rust field names
#[test]
fn test_column_field_pairs() {
    let table = accounts();
    let conv = CaseConverter::default();
    let fields = string_map(|c| conv.title_case(c), &table.columns);

    let pairs = join_slices(": ", &table.columns, &fields).unwrap();
    assert_eq!(pairs[1], "owner_uuid: OwnerUUID");

    let err = join_slices(": ", &table.columns, &fields[1..]).unwrap_err();
    assert!(matches!(err, MangleError::LengthMismatch { left: 4, right: 3 }));

    let prefixed = prefix_string_slice("a.", &table.columns);
    assert!(string_slice_match(
        &prefixed,
        &["a.type", "a.id", "a.display_name", "a.owner_uuid"]
    ));
}

/// Test tag rendering with ignored columns
#[test]
fn test_struct_tags() {
    let table = accounts();
    let conv = CaseConverter::default();
    let tags = TagSet::builder()
        .tag(TagKind::Db, TagCasing::Snake)
        .tag(TagKind::Json, TagCasing::Camel)
        .build();
    let ignored: HashSet<String> = ["user_accounts.display_name".to_string()].into();

    let rendered: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            if ignore(table.name, c, &ignored) {
                tags.render_ignored()
            } else {
                tags.render(&conv, c)
            }
        })
        .collect();

    assert_eq!(rendered[1], r#"db:"owner_uuid" json:"ownerUUID" "#);
    assert_eq!(rendered[2], r#"db:"-" json:"-" "#);
    assert_eq!(
        generate_tags(&["toml"], "owner_uuid").unwrap(),
        r#"toml:"owner_uuid" "#
    );
    assert_eq!(generate_ignore_tags(&["toml"]).unwrap(), r#"toml:"-" "#);
}

/// Test enum normalization
#[test]
fn test_enum_columns() {
    let conv = CaseConverter::default();
    let spec = parse_enum("enum.account_kind('free','paid_monthly','paid_yearly')").unwrap();

    assert_eq!(spec.name.as_deref(), Some("account_kind"));
    assert_eq!(conv.title_case(spec.name.as_deref().unwrap_or_default()), "AccountKind");

    let variants = string_map(|v| conv.title_case(v), &spec.values);
    assert_eq!(variants, ["Free", "PaidMonthly", "PaidYearly"]);
    assert_eq!(remove_duplicates(&["a", "b", "a"]), ["a", "b"]);
    assert!(contains_any(&spec.values, &["paid_monthly"]));
}

/// Test short variable names and trimmed digits
#[test]
fn test_generated_names() {
    let names: Vec<String> = (0..3).map(identifier).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(trim_left_digits("2fa_codes"), "fa_codes");
    assert_eq!(title_case_full("2fa_codes"), "FaCodes");
    assert_eq!(camel_case_full("2fa_codes"), "faCodes");

    let map = HashMap::from([("Id", "int"), ("Name", "text")]);
    assert_eq!(strmangle::tags::make_string_map(&map), "`Id`: `int`, `Name`: `text`");
}

/// Test converting from many threads against one cache
#[test]
fn test_parallel_tables_share_cache() {
    let cache = Arc::new(CaseCache::new());
    let conv = CaseConverter::with_cache(AcronymDictionary::builtin(), Arc::clone(&cache));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let conv = conv.clone();
            thread::spawn(move || {
                accounts()
                    .columns
                    .iter()
                    .map(|c| conv.title_case(c))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            ["ID", "OwnerUUID", "DisplayName", "Type"]
        );
    }

    assert_eq!(cache.len(), 4);
    cache.clear();
    assert!(cache.is_empty());
}
