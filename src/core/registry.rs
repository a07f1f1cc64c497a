// ts3sdk-client - core/registry.rs
//
// Protocol constant tables shared with the native client library.
//
// Every value here is part of the SDK's wire/API contract: callers encode
// and decode engine arguments against these exact integers, so names and
// codes must never be renumbered.
//
// Each table is available two ways:
//   - as a typed `#[repr(u32)]` enum (compile-time checked use),
//   - as an untyped `Enumeration` inside `ConstantRegistry` (lookup by
//     string, JSON export for diagnostics).

use crate::util::error::RegistryError;
use serde::ser::{Serialize, SerializeMap, Serializer};

// =============================================================================
// Untyped view
// =============================================================================

/// One named enumeration: symbolic member names mapped to integer codes,
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumeration {
    /// Enumeration name as exposed to callers (e.g. "ConnectStatus").
    pub name: &'static str,

    /// `(member, code)` pairs in declaration order.
    pub members: &'static [(&'static str, u32)],
}

impl Enumeration {
    /// Code of `member`, if it belongs to this enumeration.
    pub fn get(&self, member: &str) -> Option<u32> {
        self.members
            .iter()
            .find(|(name, _)| *name == member)
            .map(|(_, value)| *value)
    }

    /// Symbolic name for a raw code (first match in declaration order).
    pub fn name_of(&self, value: u32) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True for an enumeration with no members (never the case for the
    /// built-in tables).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Serialize for Enumeration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.members.len()))?;
        for (name, value) in self.members {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The complete, immutable set of protocol enumerations.
#[derive(Debug, PartialEq, Eq)]
pub struct ConstantRegistry {
    enumerations: &'static [Enumeration],
}

impl ConstantRegistry {
    /// All enumerations in declaration order.
    pub fn enumerations(&self) -> &'static [Enumeration] {
        self.enumerations
    }

    /// Look up an enumeration by name.
    pub fn enumeration(&self, name: &str) -> Option<&'static Enumeration> {
        self.enumerations.iter().find(|e| e.name == name)
    }

    /// Look up a single code, e.g. `get("ConnectStatus", "ESTABLISHED")`.
    pub fn get(&self, enumeration: &str, member: &str) -> Option<u32> {
        self.enumeration(enumeration)?.get(member)
    }
}

impl Serialize for ConstantRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.enumerations.len()))?;
        for enumeration in self.enumerations {
            map.serialize_entry(enumeration.name, enumeration)?;
        }
        map.end()
    }
}

// =============================================================================
// Typed tables
// =============================================================================

macro_rules! define_enumeration {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:literal => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            /// Enumeration name as exposed in the registry.
            pub const NAME: &'static str = stringify!($name);

            /// Every member in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Untyped view used by [`ConstantRegistry`].
            pub const ENUMERATION: Enumeration = Enumeration {
                name: stringify!($name),
                members: &[$(($wire, $value)),+],
            };

            /// Integer code sent to / received from the engine.
            pub const fn value(self) -> u32 {
                self as u32
            }

            /// Symbolic member name (e.g. "ESTABLISHED").
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl From<$name> for u32 {
            fn from(v: $name) -> u32 {
                v.value()
            }
        }

        impl TryFrom<u32> for $name {
            type Error = RegistryError;

            fn try_from(value: u32) -> Result<Self, RegistryError> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(RegistryError::UnknownValue {
                        enumeration: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, RegistryError> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(RegistryError::UnknownMember {
                        enumeration: stringify!($name),
                        member: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

define_enumeration! {
    /// Log output targets. Values are bit flags and may be OR-ed together
    /// when passed to the engine.
    LogTypes {
        None = 0x00 => "NONE",
        File = 0x01 => "FILE",
        Console = 0x02 => "CONSOLE",
        UserLogging = 0x04 => "USERLOGGING",
        NoNetLogging = 0x08 => "NO_NETLOGGING",
        Database = 0x10 => "DATABASE",
        Syslog = 0x20 => "SYSLOG",
    }
}

define_enumeration! {
    /// Engine log severity, most severe first.
    LogLevel {
        Critical = 0x00 => "CRITICAL",
        Error = 0x01 => "ERROR",
        Warning = 0x02 => "WARNING",
        Debug = 0x03 => "DEBUG",
        Info = 0x04 => "INFO",
        Devel = 0x05 => "DEVEL",
    }
}

define_enumeration! {
    /// Client visibility change reported on channel moves.
    Visibility {
        Enter = 0x00 => "ENTER",
        Retain = 0x01 => "RETAIN",
        Leave = 0x02 => "LEAVE",
    }
}

define_enumeration! {
    /// Connection lifecycle of a server connection handler.
    ConnectStatus {
        Disconnected = 0x00 => "DISCONNECTED",
        Connecting = 0x01 => "CONNECTING",
        Connected = 0x02 => "CONNECTED",
        Establishing = 0x03 => "ESTABLISHING",
        Established = 0x04 => "ESTABLISHED",
    }
}

define_enumeration! {
    TalkStatus {
        NotTalking = 0x00 => "NOT_TALKING",
        Talking = 0x01 => "TALKING",
        TalkingWhileDisabled = 0x02 => "TALKING_WHILE_DISABLED",
    }
}

define_enumeration! {
    /// Voice codec of a channel.
    CodecType {
        SpeexNarrowband = 0x01 => "SPEEX_NARROWBAND",
        SpeexWideband = 0x02 => "SPEEX_WIDEBAND",
        SpeexUltrawideband = 0x03 => "SPEEX_ULTRAWIDEBAND",
        CeltMono = 0x04 => "CELT_MONO",
        OpusVoice = 0x05 => "OPUS_VOICE",
        OpusMusic = 0x06 => "OPUS_MUSIC",
    }
}

define_enumeration! {
    CodecEncryptionMode {
        PerChannel = 0x00 => "PER_CHANNEL",
        ForcedOff = 0x01 => "FORCED_OFF",
        ForcedOn = 0x02 => "FORCED_ON",
    }
}

define_enumeration! {
    /// Addressee kind of a text message.
    TextMessageTargetMode {
        Client = 0x01 => "CLIENT",
        Channel = 0x02 => "CHANNEL",
        Server = 0x03 => "SERVER",
    }
}

define_enumeration! {
    MuteInputStatus {
        None = 0x00 => "NONE",
        Muted = 0x01 => "MUTED",
    }
}

define_enumeration! {
    MuteOutputStatus {
        None = 0x00 => "NONE",
        Muted = 0x01 => "MUTED",
    }
}

define_enumeration! {
    HardwareInputStatus {
        Disabled = 0x00 => "DISABLED",
        Enabled = 0x01 => "ENABLED",
    }
}

define_enumeration! {
    HardwareOutputStatus {
        Disabled = 0x00 => "DISABLED",
        Enabled = 0x01 => "ENABLED",
    }
}

define_enumeration! {
    InputDeactivationStatus {
        Active = 0x00 => "ACTIVE",
        Deactivated = 0x01 => "DEACTIVATED",
    }
}

define_enumeration! {
    /// Why a client moved, left, or was removed.
    ReasonIdentifier {
        None = 0x00 => "NONE",
        Moved = 0x01 => "MOVED",
        Subscription = 0x02 => "SUBSCRIPTION",
        LostConnection = 0x03 => "LOST_CONNECTION",
        KickChannel = 0x04 => "KICK_CHANNEL",
        KickServer = 0x05 => "KICK_SERVER",
        KickServerBan = 0x06 => "KICK_SERVER_BAN",
        ServerStop = 0x07 => "SERVERSTOP",
        ClientDisconnect = 0x08 => "CLIENTDISCONNECT",
        ChannelUpdate = 0x09 => "CHANNELUPDATE",
        ChannelEdit = 0x0A => "CHANNELEDIT",
        ClientDisconnectServerShutdown = 0x0B => "CLIENTDISCONNECT_SERVER_SHUTDOWN",
    }
}

define_enumeration! {
    /// Channel variable identifiers.
    ChannelProperties {
        Name = 0x00 => "NAME",
        Topic = 0x01 => "TOPIC",
        Description = 0x02 => "DESCRIPTION",
        Password = 0x03 => "PASSWORD",
        Codec = 0x04 => "CODEC",
        CodecQuality = 0x05 => "CODEC_QUALITY",
        MaxClients = 0x06 => "MAXCLIENTS",
        MaxFamilyClients = 0x07 => "MAXFAMILYCLIENTS",
        Order = 0x08 => "ORDER",
        FlagPermanent = 0x09 => "FLAG_PERMANENT",
        FlagSemiPermanent = 0x0A => "FLAG_SEMI_PERMANENT",
        FlagDefault = 0x0B => "FLAG_DEFAULT",
        FlagPassword = 0x0C => "FLAG_PASSWORD",
        CodecLatencyFactor = 0x0D => "CODEC_LATENCY_FACTOR",
        CodecIsUnencrypted = 0x0E => "CODEC_IS_UNENCRYPTED",
        SecuritySalt = 0x0F => "SECURITY_SALT",
        DeleteDelay = 0x10 => "DELETE_DELAY",
    }
}

define_enumeration! {
    /// Client variable identifiers.
    ClientProperties {
        UniqueIdentifier = 0x00 => "UNIQUE_IDENTIFIER",
        Nickname = 0x01 => "NICKNAME",
        Version = 0x02 => "VERSION",
        Platform = 0x03 => "PLATFORM",
        FlagTalking = 0x04 => "FLAG_TALKING",
        InputMuted = 0x05 => "INPUT_MUTED",
        OutputMuted = 0x06 => "OUTPUT_MUTED",
        OutputOnlyMuted = 0x07 => "OUTPUTONLY_MUTED",
        InputHardware = 0x08 => "INPUT_HARDWARE",
        OutputHardware = 0x09 => "OUTPUT_HARDWARE",
        InputDeactivated = 0x0A => "INPUT_DEACTIVATED",
        IdleTime = 0x0B => "IDLE_TIME",
        DefaultChannel = 0x0C => "DEFAULT_CHANNEL",
        DefaultChannelPassword = 0x0D => "DEFAULT_CHANNEL_PASSWORD",
        ServerPassword = 0x0E => "SERVER_PASSWORD",
        MetaData = 0x0F => "META_DATA",
        IsMuted = 0x10 => "IS_MUTED",
        IsRecording = 0x11 => "IS_RECORDING",
        VolumeModificator = 0x12 => "VOLUME_MODIFICATOR",
        VersionSign = 0x13 => "VERSION_SIGN",
        SecurityHash = 0x14 => "SECURITY_HASH",
    }
}

define_enumeration! {
    /// Virtual server variable identifiers.
    VirtualServerProperties {
        UniqueIdentifier = 0x00 => "UNIQUE_IDENTIFIER",
        Name = 0x01 => "NAME",
        WelcomeMessage = 0x02 => "WELCOMEMESSAGE",
        Platform = 0x03 => "PLATFORM",
        Version = 0x04 => "VERSION",
        MaxClients = 0x05 => "MAXCLIENTS",
        Password = 0x06 => "PASSWORD",
        ClientsOnline = 0x07 => "CLIENTS_ONLINE",
        ChannelsOnline = 0x08 => "CHANNELS_ONLINE",
        Created = 0x09 => "CREATED",
        Uptime = 0x0A => "UPTIME",
        CodecEncryptionMode = 0x0B => "CODEC_ENCRYPTION_MODE",
    }
}

static REGISTRY: ConstantRegistry = ConstantRegistry {
    enumerations: &[
        LogTypes::ENUMERATION,
        LogLevel::ENUMERATION,
        Visibility::ENUMERATION,
        ConnectStatus::ENUMERATION,
        TalkStatus::ENUMERATION,
        CodecType::ENUMERATION,
        CodecEncryptionMode::ENUMERATION,
        TextMessageTargetMode::ENUMERATION,
        MuteInputStatus::ENUMERATION,
        MuteOutputStatus::ENUMERATION,
        HardwareInputStatus::ENUMERATION,
        HardwareOutputStatus::ENUMERATION,
        InputDeactivationStatus::ENUMERATION,
        ReasonIdentifier::ENUMERATION,
        ChannelProperties::ENUMERATION,
        ClientProperties::ENUMERATION,
        VirtualServerProperties::ENUMERATION,
    ],
};

/// The process-wide constant registry. Pure data, never mutated.
pub fn registry() -> &'static ConstantRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_every_table() {
        let names: Vec<_> = registry().enumerations().iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "LogTypes",
                "LogLevel",
                "Visibility",
                "ConnectStatus",
                "TalkStatus",
                "CodecType",
                "CodecEncryptionMode",
                "TextMessageTargetMode",
                "MuteInputStatus",
                "MuteOutputStatus",
                "HardwareInputStatus",
                "HardwareOutputStatus",
                "InputDeactivationStatus",
                "ReasonIdentifier",
                "ChannelProperties",
                "ClientProperties",
                "VirtualServerProperties",
            ]
        );
    }

    #[test]
    fn test_table_sizes() {
        let r = registry();
        let size = |name: &str| r.enumeration(name).map(|e| e.len());
        assert_eq!(size("LogTypes"), Some(7));
        assert_eq!(size("CodecType"), Some(6));
        assert_eq!(size("ReasonIdentifier"), Some(12));
        assert_eq!(size("ChannelProperties"), Some(17));
        assert_eq!(size("ClientProperties"), Some(21));
        assert_eq!(size("VirtualServerProperties"), Some(12));
    }

    #[test]
    fn test_typed_and_untyped_views_agree() {
        for (name, value) in ConnectStatus::ENUMERATION.members {
            let typed: ConnectStatus = name.parse().unwrap();
            assert_eq!(typed.value(), *value);
            assert_eq!(ConnectStatus::try_from(*value).unwrap().name(), *name);
        }
        assert_eq!(ConnectStatus::ALL.len(), ConnectStatus::ENUMERATION.len());
    }

    #[test]
    fn test_sequential_tables_have_no_gaps() {
        for table in [
            ReasonIdentifier::ENUMERATION,
            ChannelProperties::ENUMERATION,
            ClientProperties::ENUMERATION,
            VirtualServerProperties::ENUMERATION,
        ] {
            for (i, (_, value)) in table.members.iter().enumerate() {
                assert_eq!(*value as usize, i, "{} out of sequence", table.name);
            }
        }
        for (i, (_, value)) in CodecType::ENUMERATION.members.iter().enumerate() {
            assert_eq!(*value as usize, i + 1);
        }
    }

    #[test]
    fn test_log_types_are_single_bits() {
        for (name, value) in LogTypes::ENUMERATION.members.iter().skip(1) {
            assert_eq!(value.count_ones(), 1, "{name} is not a single flag");
        }
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = TalkStatus::try_from(3).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownValue {
                enumeration: "TalkStatus",
                value: 3
            }
        );
        assert!("LOUD".parse::<TalkStatus>().is_err());
    }

    #[test]
    fn test_reverse_lookup() {
        let reasons = registry().enumeration("ReasonIdentifier").unwrap();
        assert_eq!(reasons.name_of(0x0B), Some("CLIENTDISCONNECT_SERVER_SHUTDOWN"));
        assert_eq!(reasons.name_of(0x0C), None);
    }

    #[test]
    fn test_json_preserves_declaration_order() {
        let json = serde_json::to_string(&Visibility::ENUMERATION).unwrap();
        assert_eq!(json, r#"{"ENTER":0,"RETAIN":1,"LEAVE":2}"#);
    }
}
