use async_trait::async_trait;
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    domain::{
        composer::plan_copy,
        ordering::{OrderEntry, OrderedEntries, OrderedSection},
    },
    entities::{
        education::Education,
        experience::Experience,
        resume::{CopyResumeRequest, Resume, ResumeFilter, ResumeInsert, ResumeSelection},
        skill::Skill,
    },
    errors::{is_foreign_key_violation, violated_constraint, AppError},
    repositories::sqlx_repo::SqlxResumeRepo,
};

const RESUME_COLUMNS: &str = r#"
    id, person_id, title, company_name, job_title, job_category, contract_type, language,
    custom_summary, target_salary, company_match_reason, copied_from, job_source_id,
    job_ad_url, company_notes, job_ad_full_text, created_at
"#;

const ORDERED_EXPERIENCE_COLUMNS: &str =
    "e.id, e.person_id, e.company, e.position, e.start_date, e.end_date, e.is_current, e.description";
const ORDERED_EDUCATION_COLUMNS: &str =
    "e.id, e.person_id, e.degree, e.field, e.university, e.start_date, e.end_date, e.is_current, e.gpa";
const SELECTED_SKILL_COLUMNS: &str = "s.id, s.person_id, s.name, s.category, s.is_active";

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn create_resume(&self, resume: &ResumeInsert) -> Result<Resume, AppError>;

    async fn get_resume_by_id(&self, id: &Uuid) -> Result<Resume, AppError>;

    /// Résumés matching `filter`, newest first
    async fn search_resumes(&self, filter: &ResumeFilter) -> Result<Vec<Resume>, AppError>;

    async fn count_resumes(&self) -> Result<i64, AppError>;

    async fn update_resume(&self, resume: &Resume) -> Result<Resume, AppError>;

    async fn delete_resume(&self, id: &Uuid) -> Result<(), AppError>;

    async fn get_order(&self, resume_id: &Uuid, section: OrderedSection) -> Result<OrderedEntries, AppError>;

    /// Places an entity of the résumé's person at `position`, keeping its
    /// insertion sequence when it is already listed.
    async fn set_order(
        &self,
        resume_id: &Uuid,
        section: OrderedSection,
        entity_id: &Uuid,
        position: i32,
    ) -> Result<OrderEntry, AppError>;

    async fn remove_from_order(&self, resume_id: &Uuid, section: OrderedSection, entity_id: &Uuid)
        -> Result<(), AppError>;

    async fn get_ordered_experiences(&self, resume_id: &Uuid) -> Result<Vec<Experience>, AppError>;

    async fn get_ordered_educations(&self, resume_id: &Uuid) -> Result<Vec<Education>, AppError>;

    async fn get_selected_skills(&self, resume_id: &Uuid) -> Result<Vec<Skill>, AppError>;

    /// Replaces the skill selection; every skill must belong to the résumé's person.
    async fn set_selected_skills(&self, resume_id: &Uuid, skill_ids: &[Uuid]) -> Result<(), AppError>;

    /// Clones a résumé with its ordering and skill selection in one transaction.
    async fn copy_resume(&self, source_id: &Uuid, request: &CopyResumeRequest) -> Result<Resume, AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn create_resume(&self, resume: &ResumeInsert) -> Result<Resume, AppError> {
        insert_resume(&self.pool, resume).await
    }

    async fn get_resume_by_id(&self, id: &Uuid) -> Result<Resume, AppError> {
        fetch_resume(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".into()))
    }

    async fn search_resumes(&self, filter: &ResumeFilter) -> Result<Vec<Resume>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {RESUME_COLUMNS} FROM resumes WHERE 1 = 1"));

        if let Some(pattern) = filter.company_pattern() {
            query
                .push(" AND (company_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR title ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(category) = filter.job_category {
            query.push(" AND job_category = ").push_bind(category);
        }
        if let Some(contract) = filter.contract_type {
            query.push(" AND contract_type = ").push_bind(contract);
        }
        if let Some(language) = filter.language {
            query.push(" AND language = ").push_bind(language);
        }
        if let Some(from) = filter.created_from {
            query.push(" AND created_at::date >= ").push_bind(from);
        }
        if let Some(to) = filter.created_to {
            query.push(" AND created_at::date <= ").push_bind(to);
        }
        query.push(" ORDER BY created_at DESC");

        let resumes = query.build_query_as::<Resume>().fetch_all(&self.pool).await?;
        Ok(resumes)
    }

    async fn count_resumes(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resumes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update_resume(&self, resume: &Resume) -> Result<Resume, AppError> {
        sqlx::query_as::<_, Resume>(&format!(
            r#"
            UPDATE resumes SET
                title = $1, company_name = $2, job_title = $3, job_category = $4,
                contract_type = $5, language = $6, custom_summary = $7, target_salary = $8,
                company_match_reason = $9, job_source_id = $10, job_ad_url = $11,
                company_notes = $12, job_ad_full_text = $13
            WHERE id = $14
            RETURNING {RESUME_COLUMNS}
            "#
        ))
        .bind(&resume.title)
        .bind(&resume.company_name)
        .bind(&resume.job_title)
        .bind(resume.job_category)
        .bind(resume.contract_type)
        .bind(resume.language)
        .bind(&resume.custom_summary)
        .bind(resume.target_salary)
        .bind(&resume.company_match_reason)
        .bind(resume.job_source_id)
        .bind(&resume.job_ad_url)
        .bind(&resume.company_notes)
        .bind(&resume.job_ad_full_text)
        .bind(resume.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(reference_error)?
        .ok_or_else(|| AppError::NotFound("Resume not found".into()))
    }

    async fn delete_resume(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Resume not found".into()));
        }
        Ok(())
    }

    async fn get_order(&self, resume_id: &Uuid, section: OrderedSection) -> Result<OrderedEntries, AppError> {
        fetch_order(&self.pool, resume_id, section).await
    }

    async fn set_order(
        &self,
        resume_id: &Uuid,
        section: OrderedSection,
        entity_id: &Uuid,
        position: i32,
    ) -> Result<OrderEntry, AppError> {
        let entry = sqlx::query_as::<_, OrderEntry>(&format!(
            r#"
            INSERT INTO {table} (resume_id, {column}, position)
            SELECT r.id, e.id, $3
            FROM resumes r
            JOIN {entities} e ON e.person_id = r.person_id
            WHERE r.id = $1 AND e.id = $2
            ON CONFLICT (resume_id, {column}) DO UPDATE SET position = EXCLUDED.position
            RETURNING {column} AS entity_id, position, id AS seq
            "#,
            table = section.table(),
            column = section.entity_column(),
            entities = section.entity_table(),
        ))
        .bind(resume_id)
        .bind(entity_id)
        .bind(position)
        .fetch_optional(&self.pool)
        .await?;

        match entry {
            Some(entry) => Ok(entry),
            None if resume_exists(&self.pool, resume_id).await? => Err(AppError::NotFound(format!(
                "No {section} with this id belongs to the resume's person"
            ))),
            None => Err(AppError::NotFound("Resume not found".into())),
        }
    }

    async fn remove_from_order(
        &self,
        resume_id: &Uuid,
        section: OrderedSection,
        entity_id: &Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE resume_id = $1 AND {} = $2",
            section.table(),
            section.entity_column()
        ))
        .bind(resume_id)
        .bind(entity_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("The {section} is not part of this resume")));
        }
        Ok(())
    }

    async fn get_ordered_experiences(&self, resume_id: &Uuid) -> Result<Vec<Experience>, AppError> {
        let experiences = sqlx::query_as::<_, Experience>(&format!(
            r#"
            SELECT {ORDERED_EXPERIENCE_COLUMNS}
            FROM resume_experiences re
            JOIN experiences e ON e.id = re.experience_id
            WHERE re.resume_id = $1
            ORDER BY re.position, re.id
            "#
        ))
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(experiences)
    }

    async fn get_ordered_educations(&self, resume_id: &Uuid) -> Result<Vec<Education>, AppError> {
        let educations = sqlx::query_as::<_, Education>(&format!(
            r#"
            SELECT {ORDERED_EDUCATION_COLUMNS}
            FROM resume_educations re
            JOIN educations e ON e.id = re.education_id
            WHERE re.resume_id = $1
            ORDER BY re.position, re.id
            "#
        ))
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(educations)
    }

    async fn get_selected_skills(&self, resume_id: &Uuid) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(&format!(
            r#"
            SELECT {SELECTED_SKILL_COLUMNS}
            FROM resume_skills rs
            JOIN skills s ON s.id = rs.skill_id
            WHERE rs.resume_id = $1
            ORDER BY s.category, s.name
            "#
        ))
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn set_selected_skills(&self, resume_id: &Uuid, skill_ids: &[Uuid]) -> Result<(), AppError> {
        let mut skill_ids = skill_ids.to_vec();
        skill_ids.sort_unstable();
        skill_ids.dedup();

        let mut tx = self.pool.begin().await?;

        let person_id = sqlx::query_scalar::<_, Uuid>("SELECT person_id FROM resumes WHERE id = $1")
            .bind(resume_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".into()))?;

        let owned = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills WHERE id = ANY($1) AND person_id = $2")
            .bind(&skill_ids)
            .bind(person_id)
            .fetch_one(&mut *tx)
            .await?;

        if owned != skill_ids.len() as i64 {
            return Err(AppError::NotFound("Skill not found for this person".into()));
        }

        sqlx::query("DELETE FROM resume_skills WHERE resume_id = $1")
            .bind(resume_id)
            .execute(&mut *tx)
            .await?;

        insert_skills(&mut *tx, resume_id, &skill_ids).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn copy_resume(&self, source_id: &Uuid, request: &CopyResumeRequest) -> Result<Resume, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let source = fetch_resume(&mut *tx, source_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".into()))?;

        let selection = ResumeSelection {
            experiences: fetch_order(&mut *tx, source_id, OrderedSection::Experiences).await?,
            educations: fetch_order(&mut *tx, source_id, OrderedSection::Educations).await?,
            skill_ids: fetch_skill_ids(&mut *tx, source_id).await?,
        };

        let plan = plan_copy(&source, &selection, request);

        let resume = insert_resume(&mut *tx, &plan.resume).await?;
        insert_order(&mut *tx, &resume.id, OrderedSection::Experiences, &plan.experiences).await?;
        insert_order(&mut *tx, &resume.id, OrderedSection::Educations, &plan.educations).await?;
        insert_skills(&mut *tx, &resume.id, &plan.skill_ids).await?;

        tx.commit().await?;
        Ok(resume)
    }
}

async fn fetch_resume<'e, E>(executor: E, id: &Uuid) -> Result<Option<Resume>, AppError>
where
    E: PgExecutor<'e>,
{
    let resume = sqlx::query_as::<_, Resume>(&format!("SELECT {RESUME_COLUMNS} FROM resumes WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(resume)
}

async fn resume_exists<'e, E>(executor: E, id: &Uuid) -> Result<bool, AppError>
where
    E: PgExecutor<'e>,
{
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM resumes WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await?;
    Ok(exists)
}

async fn insert_resume<'e, E>(executor: E, resume: &ResumeInsert) -> Result<Resume, AppError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Resume>(&format!(
        r#"
        INSERT INTO resumes (
            person_id, title, company_name, job_title, job_category, contract_type, language,
            custom_summary, target_salary, company_match_reason, copied_from, job_source_id,
            job_ad_url, company_notes, job_ad_full_text
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING {RESUME_COLUMNS}
        "#
    ))
    .bind(resume.person_id)
    .bind(&resume.title)
    .bind(&resume.company_name)
    .bind(&resume.job_title)
    .bind(resume.job_category)
    .bind(resume.contract_type)
    .bind(resume.language)
    .bind(&resume.custom_summary)
    .bind(resume.target_salary)
    .bind(&resume.company_match_reason)
    .bind(resume.copied_from)
    .bind(resume.job_source_id)
    .bind(&resume.job_ad_url)
    .bind(&resume.company_notes)
    .bind(&resume.job_ad_full_text)
    .fetch_one(executor)
    .await
    .map_err(reference_error)
}

async fn fetch_order<'e, E>(executor: E, resume_id: &Uuid, section: OrderedSection) -> Result<OrderedEntries, AppError>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, OrderEntry>(&format!(
        "SELECT {column} AS entity_id, position, id AS seq FROM {table} WHERE resume_id = $1 ORDER BY position, id",
        column = section.entity_column(),
        table = section.table(),
    ))
    .bind(resume_id)
    .fetch_all(executor)
    .await?;

    Ok(OrderedEntries::from_rows(rows))
}

async fn fetch_skill_ids<'e, E>(executor: E, resume_id: &Uuid) -> Result<Vec<Uuid>, AppError>
where
    E: PgExecutor<'e>,
{
    let ids = sqlx::query_scalar::<_, Uuid>("SELECT skill_id FROM resume_skills WHERE resume_id = $1")
        .bind(resume_id)
        .fetch_all(executor)
        .await?;
    Ok(ids)
}

/// Inserts entries in their current order so new sequence numbers keep ties stable.
async fn insert_order<'e, E>(
    executor: E,
    resume_id: &Uuid,
    section: OrderedSection,
    entries: &OrderedEntries,
) -> Result<(), AppError>
where
    E: PgExecutor<'e>,
{
    if entries.is_empty() {
        return Ok(());
    }

    let mut query = QueryBuilder::<Postgres>::new(format!(
        "INSERT INTO {} (resume_id, {}, position) ",
        section.table(),
        section.entity_column()
    ));
    query.push_values(entries.iter(), |mut row, entry| {
        row.push_bind(*resume_id)
            .push_bind(entry.entity_id)
            .push_bind(entry.position);
    });

    query.build().execute(executor).await?;
    Ok(())
}

async fn insert_skills<'e, E>(executor: E, resume_id: &Uuid, skill_ids: &[Uuid]) -> Result<(), AppError>
where
    E: PgExecutor<'e>,
{
    if skill_ids.is_empty() {
        return Ok(());
    }

    let mut query = QueryBuilder::<Postgres>::new("INSERT INTO resume_skills (resume_id, skill_id) ");
    query.push_values(skill_ids, |mut row, skill_id| {
        row.push_bind(*resume_id).push_bind(*skill_id);
    });

    query.build().execute(executor).await?;
    Ok(())
}

fn reference_error(err: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&err) {
        let message = match violated_constraint(&err) {
            Some("resumes_job_source_id_fkey") => "Job source not found",
            _ => "Person not found",
        };
        return AppError::NotFound(message.into());
    }
    AppError::from(err)
}
