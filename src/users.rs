use crate::error::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Column layout of the account sheet, in file order.
pub const SHEET_COLUMNS: [&str; 7] = [
    "Username",
    "Password",
    "Name",
    "DOB",
    "Security_Question",
    "Security_Answer",
    "Last_Attendance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityQuestion {
    #[serde(rename = "What is your favorite subject?")]
    FavoriteSubject,
    #[serde(rename = "What is your favorite colour?")]
    FavoriteColour,
    #[serde(rename = "What is your favorite place?")]
    FavoritePlace,
    #[serde(rename = "Where do you live?")]
    Residence,
    #[serde(rename = "What is your favorite movie?")]
    FavoriteMovie,
    #[serde(rename = "What is your favorite food?")]
    FavoriteFood,
    #[serde(rename = "What is your childhood nickname?")]
    ChildhoodNickname,
}

impl SecurityQuestion {
    pub const ALL: [SecurityQuestion; 7] = [
        SecurityQuestion::FavoriteSubject,
        SecurityQuestion::FavoriteColour,
        SecurityQuestion::FavoritePlace,
        SecurityQuestion::Residence,
        SecurityQuestion::FavoriteMovie,
        SecurityQuestion::FavoriteFood,
        SecurityQuestion::ChildhoodNickname,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            SecurityQuestion::FavoriteSubject => "What is your favorite subject?",
            SecurityQuestion::FavoriteColour => "What is your favorite colour?",
            SecurityQuestion::FavoritePlace => "What is your favorite place?",
            SecurityQuestion::Residence => "Where do you live?",
            SecurityQuestion::FavoriteMovie => "What is your favorite movie?",
            SecurityQuestion::FavoriteFood => "What is your favorite food?",
            SecurityQuestion::ChildhoodNickname => "What is your childhood nickname?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub password_hash: String,
    pub name: String,
    pub dob: NaiveDate,
    pub security_question: SecurityQuestion,
    pub security_answer_hash: String,
    pub last_attendance: Option<NaiveDate>,
}

/// One line of the sheet; field names are the on-disk column headers.
#[derive(Debug, Serialize, Deserialize)]
struct SheetRow {
    #[serde(rename = "Username")]
    username: String,
    #[serde(rename = "Password")]
    password: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "DOB")]
    dob: NaiveDate,
    #[serde(rename = "Security_Question")]
    security_question: SecurityQuestion,
    #[serde(rename = "Security_Answer")]
    security_answer: String,
    #[serde(rename = "Last_Attendance", default)]
    last_attendance: Option<NaiveDate>,
}

impl SheetRow {
    fn into_entry(self) -> (String, Account) {
        (
            self.username,
            Account {
                password_hash: self.password,
                name: self.name,
                dob: self.dob,
                security_question: self.security_question,
                security_answer_hash: self.security_answer,
                last_attendance: self.last_attendance,
            },
        )
    }

    fn from_entry(username: &str, account: &Account) -> Self {
        SheetRow {
            username: username.to_string(),
            password: account.password_hash.clone(),
            name: account.name.clone(),
            dob: account.dob,
            security_question: account.security_question,
            security_answer: account.security_answer_hash.clone(),
            last_attendance: account.last_attendance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegisterOutcome {
    Created,
    UsernameTaken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceOutcome {
    Marked,
    AlreadyMarked,
}

/// Lowercase hex SHA-256 of a secret; the only form credentials are stored in.
pub fn hash_secret(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

/// Reads the sheet at `path`. A missing file or a sheet without a `Username`
/// column is replaced by an empty sheet with the fixed schema.
pub fn load(path: &Path) -> Result<BTreeMap<String, Account>> {
    if !path.exists() {
        info!("Account sheet {} not found, creating it", path.display());
        save(path, &BTreeMap::new())?;
        return Ok(BTreeMap::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    if !headers.iter().any(|h| h == "Username") {
        warn!(
            "Account sheet {} has no Username column, reinitialising",
            path.display()
        );
        save(path, &BTreeMap::new())?;
        return Ok(BTreeMap::new());
    }
    if headers.len() != SHEET_COLUMNS.len() {
        warn!(
            "Column mismatch! Expected {} columns, found {:?}",
            SHEET_COLUMNS.len(),
            headers.iter().collect::<Vec<_>>()
        );
    }

    let mut accounts = BTreeMap::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            warn!(
                "Skipping account row {} with {} fields (header has {})",
                line + 2,
                record.len(),
                headers.len()
            );
            continue;
        }
        let row: SheetRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping unreadable account row {}: {}", line + 2, e);
                continue;
            }
        };
        let (username, account) = row.into_entry();
        accounts.insert(username, account);
    }

    debug!("Loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

/// Overwrites the sheet at `path` with every account, always in the fixed
/// seven-column layout.
pub fn save(path: &Path, accounts: &BTreeMap<String, Account>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);
    wtr.write_record(SHEET_COLUMNS)?;
    for (username, account) in accounts {
        wtr.serialize(SheetRow::from_entry(username, account))?;
    }
    wtr.flush()?;

    debug!("Saved {} accounts to {}", accounts.len(), path.display());
    Ok(())
}

/// The account sheet held in memory, written back wholesale on every mutation.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    accounts: BTreeMap<String, Account>,
}

impl UserStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let accounts = load(&path)?;
        info!("Opened account sheet {} ({} accounts)", path.display(), accounts.len());
        Ok(Self { path, accounts })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn save(&self) -> Result<()> {
        save(&self.path, &self.accounts)
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.accounts
            .get(username)
            .is_some_and(|account| account.password_hash == hash_secret(password))
    }

    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        name: &str,
        dob: NaiveDate,
        question: SecurityQuestion,
        answer: &str,
    ) -> Result<RegisterOutcome> {
        if self.accounts.contains_key(username) {
            debug!("Registration for existing user {} ignored", username);
            return Ok(RegisterOutcome::UsernameTaken);
        }

        self.accounts.insert(
            username.to_string(),
            Account {
                password_hash: hash_secret(password),
                name: name.to_string(),
                dob,
                security_question: question,
                security_answer_hash: hash_secret(answer),
                last_attendance: None,
            },
        );
        self.save()?;

        info!("Registered user {}", username);
        Ok(RegisterOutcome::Created)
    }

    /// Returns `false` without touching the sheet unless the user exists and
    /// both the question and the hashed answer match.
    pub fn reset_password(
        &mut self,
        username: &str,
        question: SecurityQuestion,
        answer: &str,
        new_password: &str,
    ) -> Result<bool> {
        let Some(account) = self.accounts.get_mut(username) else {
            return Ok(false);
        };
        if account.security_question != question
            || account.security_answer_hash != hash_secret(answer)
        {
            return Ok(false);
        }

        account.password_hash = hash_secret(new_password);
        self.save()?;

        info!("Password reset for user {}", username);
        Ok(true)
    }

    pub fn mark_attendance(&mut self, username: &str, today: NaiveDate) -> Result<AttendanceOutcome> {
        let account = self
            .accounts
            .get_mut(username)
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))?;

        if account.last_attendance == Some(today) {
            return Ok(AttendanceOutcome::AlreadyMarked);
        }

        account.last_attendance = Some(today);
        self.save()?;

        info!("Attendance marked for {} on {}", username, today);
        Ok(AttendanceOutcome::Marked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_sheet() -> PathBuf {
        std::env::temp_dir().join(format!("fitness_users_{}.csv", uuid::Uuid::new_v4()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_alice(path: &Path) -> UserStore {
        let mut store = UserStore::open(path).unwrap();
        let outcome = store
            .register(
                "alice",
                "s3cret",
                "Alice Doe",
                date(1995, 4, 12),
                SecurityQuestion::FavoriteColour,
                "green",
            )
            .unwrap();
        assert_eq!(outcome, RegisterOutcome::Created);
        store
    }

    #[test]
    fn test_hash_secret_is_sha256_hex() {
        assert_eq!(
            hash_secret("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_missing_sheet_is_created_with_schema() {
        let path = temp_sheet();
        let store = UserStore::open(&path).unwrap();
        assert!(store.is_empty());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), SHEET_COLUMNS.join(","));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_sheet_without_username_column_is_reinitialised() {
        let path = temp_sheet();
        fs::write(&path, "Login,Password\nbob,abc\n").unwrap();

        let accounts = load(&path).unwrap();
        assert!(accounts.is_empty());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Username,Password,Name"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_verify_exact_password_only() {
        let path = temp_sheet();
        let store = store_with_alice(&path);

        assert!(store.verify("alice", "s3cret"));
        assert!(!store.verify("alice", "S3cret"));
        assert!(!store.verify("alice", ""));
        assert!(!store.verify("bob", "s3cret"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_plaintext_never_stored() {
        let path = temp_sheet();
        let store = store_with_alice(&path);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("s3cret"));
        assert!(!contents.contains("green"));
        assert!(contents.contains(&hash_secret("s3cret")));
        assert_eq!(store.get("alice").unwrap().security_answer_hash, hash_secret("green"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_register_existing_username_is_noop() {
        let path = temp_sheet();
        let mut store = store_with_alice(&path);
        let before = fs::read_to_string(&path).unwrap();

        let outcome = store
            .register(
                "alice",
                "other",
                "Impostor",
                date(2000, 1, 1),
                SecurityQuestion::Residence,
                "nowhere",
            )
            .unwrap();

        assert_eq!(outcome, RegisterOutcome::UsernameTaken);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("alice").unwrap().name, "Alice Doe");
        assert!(store.verify("alice", "s3cret"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_accounts_survive_reload() {
        let path = temp_sheet();
        let mut store = store_with_alice(&path);
        store.mark_attendance("alice", date(2024, 3, 1)).unwrap();

        let reopened = UserStore::open(&path).unwrap();
        let alice = reopened.get("alice").unwrap();
        assert_eq!(alice.dob, date(1995, 4, 12));
        assert_eq!(alice.security_question, SecurityQuestion::FavoriteColour);
        assert_eq!(alice.last_attendance, Some(date(2024, 3, 1)));
        assert!(reopened.verify("alice", "s3cret"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_mark_attendance_once_per_day() {
        let path = temp_sheet();
        let mut store = store_with_alice(&path);
        let today = date(2024, 5, 20);

        assert_eq!(
            store.mark_attendance("alice", today).unwrap(),
            AttendanceOutcome::Marked
        );
        assert_eq!(
            store.mark_attendance("alice", today).unwrap(),
            AttendanceOutcome::AlreadyMarked
        );
        assert_eq!(
            store.mark_attendance("alice", date(2024, 5, 21)).unwrap(),
            AttendanceOutcome::Marked
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_mark_attendance_unknown_user() {
        let path = temp_sheet();
        let mut store = UserStore::open(&path).unwrap();
        let err = store.mark_attendance("ghost", date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, StoreError::UnknownUser(name) if name == "ghost"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_reset_password_requires_question_and_answer() {
        let path = temp_sheet();
        let mut store = store_with_alice(&path);

        assert!(!store
            .reset_password("alice", SecurityQuestion::FavoriteFood, "green", "new")
            .unwrap());
        assert!(!store
            .reset_password("alice", SecurityQuestion::FavoriteColour, "blue", "new")
            .unwrap());
        assert!(!store
            .reset_password("bob", SecurityQuestion::FavoriteColour, "green", "new")
            .unwrap());
        assert!(store.verify("alice", "s3cret"));

        assert!(store
            .reset_password("alice", SecurityQuestion::FavoriteColour, "green", "new")
            .unwrap());
        assert!(store.verify("alice", "new"));
        assert!(!store.verify("alice", "s3cret"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_rows_with_wrong_field_count_are_skipped() {
        let path = temp_sheet();
        let good = format!(
            "carol,{},Carol,1990-01-01,Where do you live?,{},",
            hash_secret("pw"),
            hash_secret("home")
        );
        let contents = format!("{}\n{}\ndave,onlytwo\n", SHEET_COLUMNS.join(","), good);
        fs::write(&path, contents).unwrap();

        let accounts = load(&path).unwrap();
        assert_eq!(accounts.len(), 1);
        let carol = &accounts["carol"];
        assert_eq!(carol.security_question, SecurityQuestion::Residence);
        assert_eq!(carol.last_attendance, None);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_header_missing_name_still_loads() {
        let path = temp_sheet();
        let row = format!(
            "frank,{},1979-03-03,What is your favorite food?,{},",
            hash_secret("pw"),
            hash_secret("soup")
        );
        fs::write(
            &path,
            format!("Username,Password,DOB,Security_Question,Security_Answer,Last_Attendance\n{row}\n"),
        )
        .unwrap();

        let store = UserStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        let frank = store.get("frank").unwrap();
        assert_eq!(frank.name, "");
        assert_eq!(frank.dob, date(1979, 3, 3));
        assert!(store.verify("frank", "pw"));

        // writing back restores the full schema
        store.save().unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(&SHEET_COLUMNS.join(",")));
        assert_eq!(UserStore::open(&path).unwrap().get("frank").unwrap().dob, date(1979, 3, 3));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_unreadable_rows_are_skipped() {
        let path = temp_sheet();
        let good = format!(
            "gina,{},Gina,1992-07-07,Where do you live?,{},",
            hash_secret("pw"),
            hash_secret("town")
        );
        let bad_date = format!(
            "hank,{},Hank,not-a-date,Where do you live?,{},",
            hash_secret("pw"),
            hash_secret("city")
        );
        fs::write(&path, format!("{}\n{good}\n{bad_date}\n", SHEET_COLUMNS.join(","))).unwrap();

        let accounts = load(&path).unwrap();
        assert_eq!(accounts.len(), 1);
        assert!(accounts.contains_key("gina"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_header_missing_dob_skips_rows_without_failing() {
        let path = temp_sheet();
        let row = format!(
            "ivan,{},Ivan,What is your favorite place?,{},",
            hash_secret("pw"),
            hash_secret("beach")
        );
        fs::write(
            &path,
            format!("Username,Password,Name,Security_Question,Security_Answer,Last_Attendance\n{row}\n"),
        )
        .unwrap();

        let accounts = load(&path).unwrap();
        assert!(accounts.is_empty());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_headers_are_trimmed() {
        let path = temp_sheet();
        let header = SHEET_COLUMNS
            .iter()
            .map(|c| format!(" {c} "))
            .collect::<Vec<_>>()
            .join(",");
        let row = format!(
            "erin,{},Erin,1988-08-08,What is your favorite movie?,{},2024-02-02",
            hash_secret("pw"),
            hash_secret("heat")
        );
        fs::write(&path, format!("{header}\n{row}\n")).unwrap();

        let accounts = load(&path).unwrap();
        assert_eq!(accounts["erin"].last_attendance, Some(date(2024, 2, 2)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_security_question_text_matches_serde_name() {
        for question in SecurityQuestion::ALL {
            let json = serde_json::to_string(&question).unwrap();
            assert_eq!(json, format!("\"{}\"", question.text()));
        }
    }
}
