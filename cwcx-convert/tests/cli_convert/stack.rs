use super::*;

#[test]
fn second_unit_makes_its_ports_mappable() {
    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--unit")
        .arg("48")
        .arg("--unit")
        .arg("24")
        .assert()
        .success()
        .stdout(predicate::str::contains("interface 2/1/7\n   no shutdown\n   vlan access 3\n"))
        .stderr(predicate::str::contains("unmapped=1"));
}

#[test]
fn series_prefixed_models_resolve() {
    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--unit")
        .arg("6100-24")
        .assert()
        .success()
        .stdout(predicate::str::contains("interface 1/1/25\n   no shutdown\n   lag 1\n"))
        .stdout(predicate::str::contains("interface 1/1/26\n   no shutdown\n   lag 1\n"))
        .stderr(predicate::str::contains(
            "skipping port 'GigabitEthernet1/0/47': port 47 exceeds the 24 ports of unit 1",
        ));
}

#[test]
fn sfp_capacity_overflow_is_a_warning() {
    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-uplinks.cfg"))
        .arg("--unit")
        .arg("48")
        .arg("--unit")
        .arg("12")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "interface 1/1/49\n   no shutdown\n   vlan trunk allowed all\n",
        ))
        .stdout(predicate::str::contains("interface 1/1/52\n"))
        .stdout(predicate::str::contains("interface 2/1/13\n   no shutdown\n   lag 1\n"))
        .stdout(predicate::str::contains("spare").not())
        .stderr(predicate::str::contains(
            "skipping port 'Ten-GigabitEthernet1/0/53': no SFP port left on unit 1 (capacity 4)",
        ));
}

#[test]
fn sfp_overflow_fails_in_strict_mode() {
    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-uplinks.cfg"))
        .arg("--unit")
        .arg("48")
        .arg("--unit")
        .arg("12")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode failed: 1 warning(s)"));
}
