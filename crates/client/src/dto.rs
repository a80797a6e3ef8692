//! Wire DTOs for the backend's JSON and their conversions into domain
//! snapshots.
//!
//! The backend speaks Spanish on the wire (`nombre`, `fechaInicio`,
//! `estado: "PUBLICADO"`, ...); domain types stay English. Conversions
//! follow the row-to-type `From` pattern, failing on wire values the
//! client does not understand.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use domain::{Account, Competition, LifecycleState, Money, Registration, Role, Tournament};

use crate::error::ClientError;

fn parse_estado(estado: &str) -> Result<LifecycleState, ClientError> {
    match estado {
        "BORRADOR" => Ok(LifecycleState::Draft),
        "PUBLICADO" => Ok(LifecycleState::Published),
        "FINALIZADO" => Ok(LifecycleState::Finalized),
        other => Err(ClientError::Wire(format!(
            "unknown tournament estado: {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoneyDto {
    pub amount: i64,
    pub currency: String,
}

impl From<MoneyDto> for Money {
    fn from(dto: MoneyDto) -> Self {
        Money::new(dto.amount, dto.currency)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentDto {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: DateTime<Utc>,
    #[serde(rename = "fechaFin")]
    pub fecha_fin: DateTime<Utc>,
    pub estado: String,
    #[serde(rename = "fechaCreacion", default)]
    pub fecha_creacion: Option<DateTime<Utc>>,
    #[serde(rename = "fechaActualizacion", default)]
    pub fecha_actualizacion: Option<DateTime<Utc>>,
    #[serde(default)]
    pub competencias: Vec<CompetitionDto>,
}

impl TryFrom<TournamentDto> for Tournament {
    type Error = ClientError;

    fn try_from(dto: TournamentDto) -> Result<Self, Self::Error> {
        let state = parse_estado(&dto.estado)?;
        let competitions = dto
            .competencias
            .into_iter()
            .map(|c| c.into_domain(dto.id))
            .collect();

        Ok(Tournament {
            id: dto.id,
            name: dto.nombre,
            description: dto.descripcion,
            start_date: dto.fecha_inicio,
            end_date: dto.fecha_fin,
            state,
            created_at: dto.fecha_creacion,
            updated_at: dto.fecha_actualizacion,
            competitions,
        })
    }
}

/// Shallow tournament reference nested inside competitions and
/// inscriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentRefDto {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionDto {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(rename = "precioBase")]
    pub precio_base: MoneyDto,
    pub cupo: u32,
    /// Present on competition listings; inscription payloads nest the
    /// competition without it.
    #[serde(rename = "inscriptosActuales", default)]
    pub inscriptos_actuales: u32,
    #[serde(default)]
    pub torneo: Option<TournamentRefDto>,
    /// Flat owner reference used by some payloads instead of `torneo`.
    #[serde(rename = "torneoId", default)]
    pub torneo_id: Option<i64>,
}

impl CompetitionDto {
    /// `owner` is the tournament the competition was fetched under; the
    /// nested `torneo` reference wins when the backend includes it.
    pub fn into_domain(self, owner: i64) -> Competition {
        let tournament_id = self
            .torneo
            .map(|t| t.id)
            .or(self.torneo_id)
            .unwrap_or(owner);
        Competition {
            id: self.id,
            tournament_id,
            name: self.nombre,
            description: self.descripcion,
            base_price: self.precio_base.into(),
            capacity: self.cupo,
            registered_count: self.inscriptos_actuales,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InscriptionDto {
    pub id: i64,
    #[serde(rename = "participanteId", default)]
    pub participante_id: i64,
    #[serde(rename = "fechaInscripcion")]
    pub fecha_inscripcion: DateTime<Utc>,
    #[serde(rename = "montoTotal")]
    pub monto_total: MoneyDto,
    pub competencia: CompetitionDto,
}

impl From<InscriptionDto> for Registration {
    fn from(dto: InscriptionDto) -> Self {
        Registration {
            id: dto.id,
            participant_id: dto.participante_id,
            competition_id: dto.competencia.id,
            registered_at: dto.fecha_inscripcion,
            amount_paid: dto.monto_total.into(),
        }
    }
}

impl InscriptionDto {
    /// Tournament the inscription belongs to, from either the nested
    /// `torneo` reference or the flat `torneoId`. Used to count prior
    /// registrations per tournament.
    pub fn tournament_id(&self) -> Option<i64> {
        self.competencia
            .torneo
            .as_ref()
            .map(|t| t.id)
            .or(self.competencia.torneo_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(rename = "fechaBaja", default)]
    pub fecha_baja: Option<DateTime<Utc>>,
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        let role = match dto.rol.as_deref() {
            Some("ADMIN") | Some("ADMINISTRADOR") => Role::Admin,
            _ => Role::Participant,
        };
        Account {
            id: dto.id,
            name: dto.nombre,
            email: dto.email,
            role,
            deactivated_at: dto.fecha_baja,
        }
    }
}

/// Body of `POST /auth` and `POST /admin/auth`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponseDto {
    pub token: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_dto_converts_spanish_wire_fields() {
        let raw = r#"{
            "id": 3,
            "nombre": "Copa Primavera",
            "descripcion": "Torneo anual",
            "fechaInicio": "2026-09-10T09:00:00Z",
            "fechaFin": "2026-09-20T20:00:00Z",
            "estado": "PUBLICADO",
            "competencias": [{
                "id": 11,
                "nombre": "Singles A",
                "precioBase": {"amount": 20000, "currency": "ARS"},
                "cupo": 16,
                "inscriptosActuales": 4
            }]
        }"#;

        let dto: TournamentDto = serde_json::from_str(raw).unwrap();
        let tournament = Tournament::try_from(dto).unwrap();

        assert_eq!(tournament.name, "Copa Primavera");
        assert_eq!(tournament.state, LifecycleState::Published);
        assert_eq!(tournament.competitions.len(), 1);

        let comp = &tournament.competitions[0];
        assert_eq!(comp.tournament_id, 3);
        assert_eq!(comp.base_price, Money::new(20_000, "ARS"));
        assert_eq!(comp.capacity, 16);
        assert_eq!(comp.registered_count, 4);
    }

    #[test]
    fn full_competition_on_the_wire_reads_as_full() {
        let raw = r#"{
            "id": 11,
            "nombre": "Singles A",
            "precioBase": {"amount": 20000, "currency": "ARS"},
            "cupo": 16,
            "inscriptosActuales": 16
        }"#;

        let dto: CompetitionDto = serde_json::from_str(raw).unwrap();
        let comp = dto.into_domain(3);

        assert_eq!(comp.registered_count, 16);
        assert!(domain::eligibility::is_full(&comp));
        assert_eq!(comp.seats_left(), 0);
    }

    #[test]
    fn unknown_estado_is_a_wire_error() {
        let raw = r#"{
            "id": 1,
            "nombre": "X",
            "fechaInicio": "2026-01-01T00:00:00Z",
            "fechaFin": "2026-01-02T00:00:00Z",
            "estado": "CANCELADO"
        }"#;

        let dto: TournamentDto = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            Tournament::try_from(dto),
            Err(ClientError::Wire(_))
        ));
    }

    #[test]
    fn inscription_dto_exposes_owning_tournament() {
        let raw = r#"{
            "id": 9,
            "participanteId": 42,
            "fechaInscripcion": "2026-09-01T12:00:00Z",
            "montoTotal": {"amount": 10000, "currency": "ARS"},
            "competencia": {
                "id": 11,
                "nombre": "Singles A",
                "precioBase": {"amount": 20000, "currency": "ARS"},
                "cupo": 16,
                "torneo": {"id": 3}
            }
        }"#;

        let dto: InscriptionDto = serde_json::from_str(raw).unwrap();
        assert_eq!(dto.tournament_id(), Some(3));

        let registration = Registration::from(dto);
        assert_eq!(registration.participant_id, 42);
        assert_eq!(registration.competition_id, 11);
        assert_eq!(registration.amount_paid, Money::new(10_000, "ARS"));
    }

    #[test]
    fn inscription_dto_accepts_flat_torneo_id() {
        let raw = r#"{
            "id": 10,
            "participanteId": 42,
            "fechaInscripcion": "2026-09-02T12:00:00Z",
            "montoTotal": {"amount": 20000, "currency": "ARS"},
            "competencia": {
                "id": 12,
                "nombre": "Dobles B",
                "precioBase": {"amount": 20000, "currency": "ARS"},
                "cupo": 8,
                "torneoId": 3
            }
        }"#;

        let dto: InscriptionDto = serde_json::from_str(raw).unwrap();
        assert_eq!(dto.tournament_id(), Some(3));
        // The flat reference also wins over the caller-supplied owner.
        assert_eq!(dto.competencia.clone().into_domain(99).tournament_id, 3);
    }

    #[test]
    fn account_role_defaults_to_participant() {
        let raw = r#"{"id": 5, "nombre": "Ana", "email": "ana@example.com"}"#;
        let account = Account::from(serde_json::from_str::<AccountDto>(raw).unwrap());

        assert_eq!(account.role, Role::Participant);
        assert!(account.is_active());

        let raw = r#"{"id": 6, "nombre": "Root", "email": "root@example.com",
                      "rol": "ADMIN", "fechaBaja": "2026-01-01T00:00:00Z"}"#;
        let account = Account::from(serde_json::from_str::<AccountDto>(raw).unwrap());
        assert_eq!(account.role, Role::Admin);
        assert!(!account.is_active());
    }
}
