use pretty_assertions::assert_eq;

use super::*;

#[test]
fn convert_writes_output_file_and_summary() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("sw1.aoscx");

    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--output")
        .arg(path_as_str(&output))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "convert_summary svis=1 lags=2 ports=8 vlans=3 unmapped=2",
        ))
        .stderr(predicate::str::contains(
            "warning: skipping port 'GigabitEthernet2/0/7': unit 2 is not part of the stack",
        ))
        .stderr(predicate::str::contains(
            "warning: skipping port 'M-GigabitEthernet0/0/0': unsupported interface prefix",
        ));

    let converted = fs::read_to_string(&output).expect("converted file");
    assert!(converted.starts_with("banner motd !\n"));
    assert!(converted.contains("\nhostname B12-SW1\n"));
    assert!(converted.contains("\nuser admin password plaintext admin123\n"));
    assert!(converted.ends_with("\nip route 0.0.0.0/0 172.17.1.100"));
}

#[test]
fn convert_renders_interfaces_in_canonical_order() {
    let output = cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .output()
        .expect("run convert");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");

    let start = stdout.find("interface lag 1").expect("first lag block");
    let end = stdout.find("ip route").expect("default route");
    let interfaces = &stdout[start..end];

    let expected = "\
interface lag 1
   description 'Uplink core'
   no shutdown
   vlan trunk allowed 2,4,1090
   vlan trunk native 1
   lacp mode active
   lacp rate fast
exit

interface lag 2
   no shutdown
   vlan access 42
   lacp mode active
   lacp rate fast
exit

interface 1/1/1
   no shutdown
   vlan access 2
   spanning-tree port-type admin-edge
   loop-protect vlan 2-8,42,104,111,150,160,180,222,233,244,255,1018,1020,1025,1073,1090,1099,1701,1772,1780,1796,1900,1916
exit

interface 1/1/2
   description Phone desk 12
   no shutdown
   vlan trunk allowed 2,1090,1716
   vlan trunk native 2
   qos trust dscp
   spanning-tree port-type admin-edge
exit

interface 1/1/3
   shutdown
exit

interface 1/1/4
   no shutdown
   vlan trunk allowed 4
   qos trust dscp
   spanning-tree port-type admin-edge
exit

interface 1/1/5
   no shutdown
   vlan trunk allowed 20,30
   vlan trunk native 30
   spanning-tree port-type admin-edge
exit

interface 1/1/47
   no shutdown
   lag 2
exit

interface 1/1/49
   no shutdown
   lag 1
exit

interface 1/1/50
   no shutdown
   lag 1
exit

";
    assert_eq!(interfaces, expected);
}

#[test]
fn convert_uses_explicit_hostname_and_password() {
    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--hostname")
        .arg("LAB-7")
        .arg("--password")
        .arg("s3cret")
        .assert()
        .success()
        .stdout(predicate::str::contains("=============================== LAB-7 ====="))
        .stdout(predicate::str::contains("hostname LAB-7\n"))
        .stdout(predicate::str::contains("user admin password plaintext s3cret"));
}

#[test]
fn convert_falls_back_to_profile_hostname_without_sysname() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("plain.cfg");
    fs::write(&input, "interface GigabitEthernet1/0/1\n port access vlan 10\n#\n").expect("write");

    cwcx()
        .arg("convert")
        .arg(path_as_str(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("hostname Switch\n"))
        .stdout(predicate::str::contains("interface 1/1/1\n   no shutdown\n   vlan access 10\n"));
}

#[test]
fn convert_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("sw.cfg");
    fs::copy(fixture("fixtures/comware-sample.cfg"), &input).expect("copy fixture");

    cwcx()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite source config"));
}

#[test]
fn convert_strict_fails_on_dropped_ports_without_writing() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("out.aoscx");

    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--output")
        .arg(path_as_str(&output))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode failed: 2 warning(s)"));
    assert!(!output.exists());
}

#[test]
fn convert_with_custom_profile() {
    let dir = tempdir().expect("tempdir");
    let profile = dir.path().join("site.toml");
    fs::write(
        &profile,
        r#"
banner = ["! {hostname}"]
system = ["ntp enable", ""]

[defaults]
hostname = "edge"
password = "changeme"

[policy]
voice_qos_vlan = 1090
qos_tagged_vlan = 4
loop_detect_source = "1 to 4094"
loop_protect_vlans = "1-100"
default_route = "ip route 0.0.0.0/0 10.0.0.254"

[[vlan]]
id = 2
name = "Users"
igmp = true
"#,
    )
    .expect("write profile");

    let output = cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--profile")
        .arg(path_as_str(&profile))
        .output()
        .expect("run convert");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");

    assert!(stdout.starts_with("! B12-SW1\n\nhostname B12-SW1\n"));
    assert!(stdout.contains("ntp enable\n\nvlan 2\n   name Users\n   ip igmp snooping enable\nexit\n\n\n"));
    assert!(stdout.contains("   loop-protect vlan 1-100\n"));
    assert!(stdout.contains("user admin password plaintext changeme"));
    assert!(stdout.trim_end().ends_with("ip route 0.0.0.0/0 10.0.0.254"));
    assert!(!stdout.contains("vlan 1090\n"));
}

#[test]
fn convert_reports_broken_profile() {
    let dir = tempdir().expect("tempdir");
    let profile = dir.path().join("broken.toml");
    fs::write(&profile, "[defaults]\nhostname = 3\n").expect("write profile");

    cwcx()
        .arg("convert")
        .arg(fixture("fixtures/comware-sample.cfg"))
        .arg("--profile")
        .arg(path_as_str(&profile))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse profile"));
}

#[test]
fn convert_missing_input_fails_with_context() {
    cwcx()
        .arg("convert")
        .arg("does-not-exist.cfg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read does-not-exist.cfg"));
}
