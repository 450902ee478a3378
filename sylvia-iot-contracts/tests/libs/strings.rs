use laboratory::{SpecContext, expect};

use sylvia_iot_contracts::strings;

use crate::TestState;

/// Test [`strings::is_uuid`].
pub fn is_uuid(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(strings::is_uuid("7a1707f0-166f-4c4b-bc9d-1d54c74e0137")).to_equal(true)?;
    expect(strings::is_uuid("7A1707F0-166F-4C4B-BC9D-1D54C74E0137")).to_equal(true)?;
    expect(strings::is_uuid("")).to_equal(false)?;
    expect(strings::is_uuid("jfdw324")).to_equal(false)?;
    expect(strings::is_uuid("7a1707f0166f4c4bbc9d1d54c74e0137")).to_equal(false)?;
    expect(strings::is_uuid("{7a1707f0-166f-4c4b-bc9d-1d54c74e0137}")).to_equal(false)?;
    expect(strings::is_uuid("7a1707f0-166f-4c4b-bc9d-1d54c74e013z")).to_equal(false)
}

/// Test [`strings::is_uri`].
pub fn is_uri(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(strings::is_uri("http://localhost:59900")).to_equal(true)?;
    expect(strings::is_uri("mqtt://broker.local/topic")).to_equal(true)?;
    expect(strings::is_uri("invalid")).to_equal(false)?;
    expect(strings::is_uri(":://")).to_equal(false)
}

/// Test [`strings::new_uuid`].
pub fn new_uuid(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let id = strings::new_uuid();
    expect(strings::is_uuid(id.as_str())).to_equal(true)?;
    expect(id).to_not_equal(strings::new_uuid())
}
