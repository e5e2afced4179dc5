use zone53::dns::enums::{RecordClass, RecordType};
use zone53::zone::{ZoneParser, ZoneRecord};

fn parse_all(origin: &str, contents: &str) -> Vec<Result<ZoneRecord, zone53::zone::ZoneError>> {
    let mut parser = ZoneParser::new(origin);
    parser.records(contents).collect()
}

fn parse_ok(origin: &str, contents: &str) -> Vec<ZoneRecord> {
    parse_all(origin, contents)
        .into_iter()
        .map(|r| r.unwrap())
        .collect()
}

#[test]
fn test_simple_zone_parsing() {
    let zone_content = r#"
$ORIGIN example.com.
$TTL 3600

@   IN  SOA ns1.example.com. admin.example.com. 2024010101 3600 900 604800 86400

@   IN  NS  ns1.example.com.
@   IN  NS  ns2.example.com.

@       IN  A   192.0.2.1
www     IN  A   192.0.2.2
mail    IN  A   192.0.2.3

@       IN  MX  10 mail.example.com.
"#;

    let records = parse_ok("example.com", zone_content);
    assert_eq!(records.len(), 7);

    let www = records
        .iter()
        .find(|r| r.name == "www.example.com.")
        .unwrap();
    assert_eq!(www.rtype, RecordType::A);
    assert_eq!(www.class, RecordClass::IN);
    assert_eq!(www.ttl, Some(3600));
    assert_eq!(www.rdata, "192.0.2.2");

    let mx = records
        .iter()
        .find(|r| r.rtype == RecordType::MX)
        .unwrap();
    assert_eq!(mx.name, "example.com.");
    assert_eq!(mx.rdata, "10 mail.example.com.");
}

#[test]
fn test_fully_qualified_names_pass_through() {
    let records = parse_ok("foo.bar", "foo.bar. 3600 IN A 127.0.0.1\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "foo.bar.");
    assert_eq!(records[0].ttl, Some(3600));
}

#[test]
fn test_ttl_suffixes() {
    let zone_content = "\
a 30s IN A 192.0.2.1
b 5m  IN A 192.0.2.2
c 2h  IN A 192.0.2.3
d 1d  IN A 192.0.2.4
e 1w  IN A 192.0.2.5
";
    let records = parse_ok("example.com", zone_content);
    let ttls: Vec<Option<u32>> = records.iter().map(|r| r.ttl).collect();
    assert_eq!(
        ttls,
        vec![
            Some(30),
            Some(300),
            Some(7200),
            Some(86400),
            Some(604800)
        ]
    );
}

#[test]
fn test_name_inheritance_from_previous_record() {
    let zone_content = "\
www 300 IN A 192.0.2.1
    300 IN A 192.0.2.2
";
    let records = parse_ok("example.com", zone_content);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "www.example.com.");
    assert_eq!(records[1].name, "www.example.com.");
}

#[test]
fn test_trailing_comment_captured() {
    let records = parse_ok("foo.bar", "foo.bar. 3600 IN A 127.0.0.1 ; This is a test\n");
    assert_eq!(records[0].comment.as_deref(), Some("This is a test"));
}

#[test]
fn test_semicolon_inside_quotes_is_data() {
    let records = parse_ok(
        "example.com",
        "txt 300 IN TXT \"v=DKIM1; k=rsa; p=abc\" ; key\n",
    );
    assert_eq!(records[0].rtype, RecordType::TXT);
    assert_eq!(records[0].rdata, "\"v=DKIM1; k=rsa; p=abc\"");
    assert_eq!(records[0].comment.as_deref(), Some("key"));
}

#[test]
fn test_multiline_soa_record() {
    let zone_content = "\
@ IN SOA ns1.example.com. admin.example.com. (
    2024010101 ; serial
    3600
    900
    604800
    86400 )
";
    let records = parse_ok("example.com", zone_content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rtype, RecordType::SOA);
    assert_eq!(
        records[0].rdata,
        "ns1.example.com. admin.example.com. 2024010101 3600 900 604800 86400"
    );
}

#[test]
fn test_unclosed_parentheses_is_an_error() {
    let results = parse_all("example.com", "@ IN SOA ns1.example.com. admin.example.com. (\n  2024010101\n");
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[test]
fn test_generate_directive() {
    let records = parse_ok(
        "example.com",
        "$TTL 300\n$GENERATE 1-3 host-$ A 192.0.2.$\n",
    );
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "host-1.example.com.");
    assert_eq!(records[0].rdata, "192.0.2.1");
    assert_eq!(records[0].ttl, Some(300));
    assert_eq!(records[2].name, "host-3.example.com.");
    assert_eq!(records[2].rdata, "192.0.2.3");
}

#[test]
fn test_generate_directive_with_format_spec() {
    let records = parse_ok(
        "example.com",
        "$GENERATE 1-2 host-${0,2,d} A 10.0.0.$\n",
    );
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "host-01.example.com.");
    assert_eq!(records[1].name, "host-02.example.com.");
    assert_eq!(records[1].rdata, "10.0.0.2");
}

#[test]
fn test_generate_directive_with_step() {
    let records = parse_ok("example.com", "$GENERATE 0-10/5 host-$ A 10.0.0.$\n");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "host-0.example.com.");
    assert_eq!(records[2].name, "host-10.example.com.");
}

#[test]
fn test_overflowing_ttl_is_a_recoverable_error() {
    // 4294967 weeks exceeds u32 seconds; the record must fail, not the run
    let zone_content = "\
a 4294967w IN A 192.0.2.1
b 300 IN A 192.0.2.2
";
    let results = parse_all("example.com", zone_content);
    assert_eq!(results.len(), 2);
    assert!(results[0].is_err());
    assert_eq!(results[1].as_ref().unwrap().name, "b.example.com.");
}

#[test]
fn test_overflowing_ttl_directive_is_a_recoverable_error() {
    let results = parse_all("example.com", "$TTL 4294967w\nwww 300 IN A 192.0.2.1\n");
    assert_eq!(results.len(), 2);
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
}

#[test]
fn test_generate_offset_overflow_is_a_recoverable_error() {
    let results = parse_all(
        "example.com",
        "$GENERATE 4294967295-4294967295 host-${1,2,d} A 10.0.0.1\n",
    );
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[test]
fn test_generate_range_ending_at_u32_max() {
    let records = parse_ok(
        "example.com",
        "$GENERATE 4294967294-4294967295 host-$ A 10.0.0.1\n",
    );
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "host-4294967294.example.com.");
    assert_eq!(records[1].name, "host-4294967295.example.com.");
}

#[test]
fn test_malformed_line_does_not_stop_the_stream() {
    let zone_content = "\
good.example.com. 300 IN A 192.0.2.1
this is not a record line
other.example.com. 300 IN A 192.0.2.2
";
    let results = parse_all("example.com", zone_content);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());

    let err = results[1].as_ref().unwrap_err().to_string();
    assert!(err.contains("line 2"), "unexpected error: {err}");
}

#[test]
fn test_unknown_directive_is_skipped() {
    let records = parse_ok(
        "example.com",
        "$INCLUDE other.zone\nwww 300 IN A 192.0.2.1\n",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "www.example.com.");
}

#[test]
fn test_origin_directive_overrides_seed() {
    let records = parse_ok(
        "example.com",
        "$ORIGIN sub.example.com.\nwww 300 IN A 192.0.2.1\n",
    );
    assert_eq!(records[0].name, "www.sub.example.com.");
}
