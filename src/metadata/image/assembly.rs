//! The assembly manifest and assembly references.

use std::fmt;

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::{
    metadata::{
        image::MetadataImage,
        tables::{AssemblyFlags, AssemblyHashAlgorithm, AssemblyRaw, AssemblyRefRaw, TableId},
        token::Token,
    },
    Result,
};

/// A four part assembly version, `major.minor.build.revision`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version
    pub major: u16,
    /// Minor version
    pub minor: u16,
    /// Build number
    pub build: u16,
    /// Revision number
    pub revision: u16,
}

impl Version {
    /// Create a version from its four parts
    #[must_use]
    pub fn new(major: u16, minor: u16, build: u16, revision: u16) -> Version {
        Version {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// The public key token of `public_key`: the last 8 bytes of its hash, in reverse order.
///
/// MD5 is used for [`AssemblyHashAlgorithm::Md5`], SHA-1 for everything else.
#[must_use]
pub fn public_key_token(public_key: &[u8], algorithm: AssemblyHashAlgorithm) -> [u8; 8] {
    let digest: Vec<u8> = match algorithm {
        AssemblyHashAlgorithm::Md5 => Md5::digest(public_key).to_vec(),
        _ => Sha1::digest(public_key).to_vec(),
    };

    let mut token = [0_u8; 8];
    for (target, source) in token.iter_mut().zip(digest.iter().rev()) {
        *target = *source;
    }
    token
}

/// The `Assembly` row of this module, the manifest
#[derive(Debug)]
pub struct AssemblyDefinition {
    /// Row id
    pub rid: u32,
    /// Token, `0x20000001` for a well-formed image
    pub token: Token,
    /// Hash algorithm of the files of the assembly
    pub hash_algorithm: AssemblyHashAlgorithm,
    /// Assembly version
    pub version: Version,
    /// `AssemblyFlags`
    pub flags: AssemblyFlags,
    /// The full public key, if the assembly is signed
    pub public_key: Option<Vec<u8>>,
    /// Simple name
    pub name: String,
    /// Culture, `None` for the neutral culture
    pub culture: Option<String>,
}

impl AssemblyDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<AssemblyDefinition>> {
        let Some(row) = image.tables().row::<AssemblyRaw>(rid)? else {
            return Ok(None);
        };

        let public_key = image.blob_value(row.public_key)?;
        Ok(Some(AssemblyDefinition {
            rid,
            token: Token::from_parts(TableId::Assembly, rid),
            hash_algorithm: AssemblyHashAlgorithm::from(row.hash_alg_id),
            version: Version::new(
                row.major_version,
                row.minor_version,
                row.build_number,
                row.revision_number,
            ),
            flags: AssemblyFlags::from_bits_retain(row.flags),
            public_key: (!public_key.is_empty()).then(|| public_key.to_vec()),
            name: image.string(row.name)?.to_string(),
            culture: image.string_value(row.culture)?,
        }))
    }

    /// The public key token, `None` if the assembly has no public key
    #[must_use]
    pub fn public_key_token(&self) -> Option<[u8; 8]> {
        self.public_key
            .as_deref()
            .map(|key| public_key_token(key, self.hash_algorithm))
    }
}

/// An `AssemblyRef` row
#[derive(Debug)]
pub struct AssemblyReference {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// Referenced version
    pub version: Version,
    /// `AssemblyFlags`, [`AssemblyFlags::PUBLIC_KEY`] tells whether `public_key_or_token`
    /// holds a full key
    pub flags: AssemblyFlags,
    /// Public key or public key token of the referenced assembly
    pub public_key_or_token: Option<Vec<u8>>,
    /// Simple name
    pub name: String,
    /// Culture, `None` for the neutral culture
    pub culture: Option<String>,
    /// Hash of the referenced assembly
    pub hash_value: Option<Vec<u8>>,
}

impl AssemblyReference {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<AssemblyReference>> {
        let Some(row) = image.tables().row::<AssemblyRefRaw>(rid)? else {
            return Ok(None);
        };

        let key = image.blob_value(row.public_key_or_token)?;
        let hash = image.blob_value(row.hash_value)?;
        Ok(Some(AssemblyReference {
            rid,
            token: Token::from_parts(TableId::AssemblyRef, rid),
            version: Version::new(
                row.major_version,
                row.minor_version,
                row.build_number,
                row.revision_number,
            ),
            flags: AssemblyFlags::from_bits_retain(row.flags),
            public_key_or_token: (!key.is_empty()).then(|| key.to_vec()),
            name: image.string(row.name)?.to_string(),
            culture: image.string_value(row.culture)?,
            hash_value: (!hash.is_empty()).then(|| hash.to_vec()),
        }))
    }

    /// The public key token of the referenced assembly. Computed with SHA-1 if a full key is
    /// stored, `None` if neither a key nor an 8 byte token is present.
    #[must_use]
    pub fn public_key_token(&self) -> Option<[u8; 8]> {
        let data = self.public_key_or_token.as_deref()?;
        if self.flags.contains(AssemblyFlags::PUBLIC_KEY) {
            return Some(public_key_token(data, AssemblyHashAlgorithm::Sha1));
        }

        data.try_into().ok()
    }
}
