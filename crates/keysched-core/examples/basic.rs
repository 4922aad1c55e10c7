//! Derives each supported schedule from a fixed key and prints a summary.

use keysched_core::{
    aes_key_expansion, des_key_schedule, triple_des_key_schedule, KeyScheduleError,
};

fn main() -> Result<(), KeyScheduleError> {
    let des = des_key_schedule(&[0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1])?;
    for (round, subkey) in des.iter().enumerate() {
        println!("K{:02}: {:012X}", round + 1, subkey);
    }

    let mut tdes_key = [0u8; 16];
    tdes_key[..8].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
    tdes_key[8..].copy_from_slice(&[0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1]);
    let tdes = triple_des_key_schedule(&tdes_key)?;
    println!("3DES {:?}: K1 == K3 is {}", tdes.keying(), tdes.k1() == tdes.k3());

    let aes = aes_key_expansion(&[
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ])?;
    println!("AES round keys: {}", aes.len());
    println!("final round key: {:02X?}", aes.last());

    // Wrong lengths are rejected before any work is done.
    match des_key_schedule(&[0u8; 7]) {
        Err(err) => println!("rejected: {err}"),
        Ok(_) => unreachable!("7-byte DES key accepted"),
    }
    Ok(())
}
