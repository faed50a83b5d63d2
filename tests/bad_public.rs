use srp6a::groups::G_1024;
use srp6a::utils::{compute_verifier, gen_key};
use srp6a::{SrpAuthError, SrpClient, SrpServer};

fn test_client() -> SrpClient<'static> {
    SrpClient::new(
        &G_1024,
        b"salt",
        b"alice",
        b"password123",
        &gen_key(32).unwrap(),
    )
    .unwrap()
}

fn test_server() -> SrpServer<'static> {
    let verifier = compute_verifier(&G_1024, b"salt", b"alice", b"password123");
    SrpServer::new(&G_1024, &verifier, &gen_key(32).unwrap()).unwrap()
}

#[test]
fn bad_b_pub_zero() {
    let zero = vec![0u8; G_1024.n_width()];
    let err = test_client().process_reply(&zero).unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "b_pub" }
    ));
}

#[test]
fn bad_b_pub_modulus() {
    let n = G_1024.n.to_bytes_be();
    let err = test_client().process_reply(&n).unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "b_pub" }
    ));
}

#[test]
fn bad_b_pub_wrong_length() {
    let err = test_client().process_reply(b"").unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "b_pub" }
    ));

    let long = vec![1u8; G_1024.n_width() + 1];
    let err = test_client().process_reply(&long).unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "b_pub" }
    ));
}

#[test]
fn bad_a_pub_zero() {
    let zero = vec![0u8; G_1024.n_width()];
    let err = test_server().process_reply(&zero).unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "a_pub" }
    ));
}

#[test]
fn bad_a_pub_modulus() {
    let n = G_1024.n.to_bytes_be();
    let err = test_server().process_reply(&n).unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "a_pub" }
    ));
}

#[test]
fn bad_a_pub_wrong_length() {
    let err = test_server().process_reply(b"").unwrap_err();
    assert!(matches!(
        err,
        SrpAuthError::IllegalParameter { name: "a_pub" }
    ));
}

// An all-zero ephemeral secret is zero modulo N and must be rejected at
// construction, before anything crosses the wire.
#[test]
fn zero_ephemeral_secrets() {
    let err = SrpClient::new(&G_1024, b"salt", b"alice", b"pw", &[0u8; 32]).unwrap_err();
    assert!(matches!(err, SrpAuthError::IllegalParameter { name: "a" }));

    let verifier = compute_verifier(&G_1024, b"salt", b"alice", b"pw");
    let err = SrpServer::new(&G_1024, &verifier, &[]).unwrap_err();
    assert!(matches!(err, SrpAuthError::IllegalParameter { name: "b" }));
}

// A proof of the wrong length is an authentication failure, not a shape
// error: the comparison simply cannot match.
#[test]
fn truncated_proof_fails() {
    let client = test_client();
    let server = test_server();
    let a_pub = client.compute_a_pub();
    let b_pub = server.compute_b_pub();
    let client = client.process_reply(&b_pub).unwrap();
    let server = server.process_reply(&a_pub).unwrap();

    let err = server.verify_client(&client.proof()[1..]).unwrap_err();
    assert!(matches!(err, SrpAuthError::BadRecordMac { peer: "client" }));

    let err = client.verify_server(b"not a proof").unwrap_err();
    assert!(matches!(err, SrpAuthError::BadRecordMac { peer: "server" }));
}
