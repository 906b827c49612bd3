use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::Utc;
use proctor_core::model::{Alternative, Exam, ExamSubmission, Question, Student};
use proctor_core::score::{score_submission, GradedAnswer};
use uuid::Uuid;

fn make_graded(exam_id: Uuid, n: u32) -> Vec<GradedAnswer> {
    (1..=n)
        .map(|number| {
            let question = Question {
                id: Uuid::new_v4(),
                exam_id,
                number,
                content: format!("Question {number}"),
            };
            let selected = Alternative {
                id: Uuid::new_v4(),
                question_id: question.id,
                label: "A".into(),
                content: "answer".into(),
                is_correct: number % 2 == 0,
            };
            GradedAnswer { question, selected }
        })
        .collect()
}

fn bench_score_submission(c: &mut Criterion) {
    let student = Student {
        id: Uuid::new_v4(),
        name: "bench".into(),
    };
    let exam = Exam {
        id: Uuid::new_v4(),
        name: "bench exam".into(),
    };
    let submission = ExamSubmission {
        id: Uuid::new_v4(),
        student_id: student.id,
        exam_id: exam.id,
        submitted_at: Utc::now(),
    };

    let mut group = c.benchmark_group("score_submission");

    for n in [10u32, 100, 1000] {
        let graded = make_graded(exam.id, n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| score_submission(black_box(&submission), &student, &exam, black_box(&graded)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_submission);
criterion_main!(benches);
