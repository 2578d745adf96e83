use flate2::read::MultiGzDecoder;
use std::io::{self, Read};

/// Inflate a gzip payload. Concatenated members are decoded back to back.
pub fn gunzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len().saturating_mul(4));
    MultiGzDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn test_gunzip_multi_member() -> anyhow::Result<()> {
        let mut payload = gzip(b"a,b\n1,2\n");
        payload.extend(gzip(b"3,4\n"));
        assert_eq!(gunzip(&payload)?, b"a,b\n1,2\n3,4\n");
        Ok(())
    }

    #[test]
    fn test_gunzip_rejects_plain_text() {
        assert!(gunzip(b"Drug Name,CAS-RN\nx,y\n").is_err());
    }
}
