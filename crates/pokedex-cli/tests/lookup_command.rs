mod common;

use common::TestFixture;
use pokedex_testing::{StubResponse, StubServer, fixtures};
use predicates::prelude::*;

fn pikachu_server() -> StubServer {
    StubServer::builder()
        .route(
            "/pokemon/pikachu",
            StubResponse::json(200, fixtures::pikachu_json()),
        )
        .route(
            "/pokemon/25",
            StubResponse::json(200, fixtures::pikachu_json()),
        )
        .start()
}

#[test]
fn test_lookup_by_name_prints_record() {
    let fixture = TestFixture::new();
    let server = pikachu_server();

    let output = fixture
        .command_against(&server.base_url())
        .args(["Pikachu", "--no-color"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    Name: Pikachu
    National Pokédex Number: #025
    Type(s): Electric
    Base Stats:
      HP: 35
      Attack: 55
      Defense: 40
      Sp. Atk: 50
      Sp. Def: 50
      Speed: 90
    ");
    assert_eq!(server.requested_paths(), vec!["/pokemon/pikachu"]);
}

#[test]
fn test_number_with_modifiers() {
    let fixture = TestFixture::new();
    let server = pikachu_server();

    fixture
        .command_against(&server.base_url())
        .args(["--number", "25", "--abilities", "--size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Static"))
        .stdout(predicate::str::contains("  Hidden Ability: Lightning Rod"))
        .stdout(predicate::str::contains("  Height: 0.4 m"))
        .stdout(predicate::str::contains("  Weight: 6.0 kg"))
        .stdout(predicate::str::contains("\x1b[").not());

    assert_eq!(server.requested_paths(), vec!["/pokemon/25"]);
}

#[test]
fn test_json_format() {
    let fixture = TestFixture::new();
    let server = pikachu_server();

    let output = fixture
        .command_against(&server.base_url())
        .args(["pikachu", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Pikachu");
    assert_eq!(value["id_badge"], "025");
    assert_eq!(value["types"][0]["color"], "#F8D030");
    assert_eq!(value["stats"][5]["tier"], "strong");
    assert_eq!(value["abilities"]["hidden"][0], "Lightning Rod");
}

#[test]
fn test_unknown_name_exits_nonzero() {
    let fixture = TestFixture::new();
    let server = StubServer::builder().start();

    fixture
        .command_against(&server.base_url())
        .arg("pikachuu")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not find Pokémon 'pikachuu'"))
        .stderr(predicate::str::contains("Please check the spelling"));
}

#[test]
fn test_no_selector_prints_usage_without_network() {
    let fixture = TestFixture::new();
    let server = StubServer::builder().start();

    fixture
        .command_against(&server.base_url())
        .arg("--abilities")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: pokedex"));

    assert!(server.requested_paths().is_empty());
}

#[test]
fn test_random_respects_catalog_size() {
    let fixture = TestFixture::new();
    let server = StubServer::builder()
        .route(
            "/pokemon/1",
            StubResponse::json(
                200,
                fixtures::pokemon_json(
                    1,
                    "bulbasaur",
                    &["grass", "poison"],
                    &[45, 49, 49, 65, 65, 45],
                    &[("overgrow", false), ("chlorophyll", true)],
                    7,
                    69,
                ),
            ),
        )
        .start();
    fixture.write_config(&format!(
        "api_base = \"{}\"\ncatalog_size = 1\n",
        server.base_url()
    ));

    // --random wins over the name and the number
    fixture
        .command()
        .args(["pikachu", "--number", "25", "--random"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Bulbasaur"))
        .stdout(predicate::str::contains("Type(s): Grass, Poison"));

    assert_eq!(server.requested_paths(), vec!["/pokemon/1"]);
}

#[test]
fn test_server_error_is_connection_failure() {
    let fixture = TestFixture::new();
    let server = StubServer::builder()
        .fallback(StubResponse::status(503))
        .start();

    fixture
        .command_against(&server.base_url())
        .arg("pikachu")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not connect to the PokéAPI"));
}

#[test]
fn test_invalid_catalog_size_is_config_error() {
    let fixture = TestFixture::new();
    fixture.write_config("catalog_size = 0\n");

    fixture
        .command()
        .arg("pikachu")
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog_size"));
}
