use super::*;

#[test]
fn edits_change_descriptions_and_lag_membership() {
    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--edits")
        .arg(fixture("fixtures/edits-sample.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "interface lag 1\n   description 'Core uplink'\n",
        ))
        .stdout(predicate::str::contains(
            "interface 1/1/1\n   description Classroom 4\n   no shutdown\n   vlan access 2\n",
        ))
        .stdout(predicate::str::contains(
            "interface 1/1/4\n   no shutdown\n   lag 2\nexit\n",
        ));
}

#[test]
fn rejected_edits_are_warnings_and_fail_strict() {
    let dir = tempdir().expect("tempdir");
    let edits = dir.path().join("edits.toml");
    fs::write(
        &edits,
        "[[interface]]\nname = \"1/1/2\"\nlag = \"9\"\n",
    )
    .expect("write edits");

    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--edits")
        .arg(path_as_str(&edits))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: edit: LAG 9 for '1/1/2' does not exist",
        ));

    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--unit")
        .arg("48")
        .arg("--unit")
        .arg("48")
        .arg("--edits")
        .arg(path_as_str(&edits))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode failed: 2 warning(s)"));
}
