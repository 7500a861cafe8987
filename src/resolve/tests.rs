// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use indoc::indoc;

use super::*;

#[test]
fn parse_good_response() {
    let response = indoc! {"
        # Crab #Q1
        #=S=Simbad (CDS, via url):    1    35ms
        %@ 503899
        %C.0 SNR
        %J 83.6287 +22.0147 = 05 34 30.9 +22 00 53
        %J.E [3600.00 3600.00 0] C 2022yCat.1355....0G
        %I.0 NAME Crab
    "};
    let result = parse_sesame_response("Crab", response);
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pos = result.unwrap();
    assert_abs_diff_eq!(pos.ra, 83.6287);
    assert_abs_diff_eq!(pos.dec, 22.0147);
}

#[test]
fn parse_negative_declination() {
    let response = "%J 255.706 -48.790 = 17 02 49.4 -48 47 23";
    let pos = parse_sesame_response("GX 339-4", response).unwrap();
    assert_abs_diff_eq!(pos.ra, 255.706);
    assert_abs_diff_eq!(pos.dec, -48.790);
}

#[test]
fn parse_no_match_is_not_found() {
    let response = indoc! {"
        # notasource #Q2
        #=S=Simbad (CDS, via url):    0    30ms
        #!S : No known catalog could be attached to the name
    "};
    match parse_sesame_response("notasource", response) {
        Err(ResolveError::NotFound(name)) => assert_eq!(name, "notasource"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn parse_garbled_position_line() {
    let response = "%J eighty-three +22.0147 = 05 34 30.9";
    match parse_sesame_response("Crab", response) {
        Err(ResolveError::BadPosition { line }) => assert!(line.starts_with("%J ")),
        other => panic!("expected BadPosition, got {other:?}"),
    }
}

#[test]
fn parse_is_idempotent() {
    let response = "%J 83.6287 +22.0147 = 05 34 30.9 +22 00 53";
    let first = parse_sesame_response("Crab", response).unwrap();
    let second = parse_sesame_response("Crab", response).unwrap();
    assert_eq!(first, second);
}
